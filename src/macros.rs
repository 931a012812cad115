// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! field_map {
    // Schema shorthand: field_map![Name => "title", ImageUrl => "image"]
    ($($field:ident => $key:expr),* $(,)?) => {
        ::std::vec![
            $( ($crate::config::schema::Field::$field, ::std::string::String::from($key)), )*
        ]
    };
}
