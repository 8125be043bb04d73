pub mod convert;
pub mod info;
pub mod inspect;
pub mod schema;
