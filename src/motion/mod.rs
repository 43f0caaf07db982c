pub mod carousel;
pub mod counter;
pub mod improvement;
pub mod lazy;
pub mod paged;
pub mod quote;
pub mod reveal;
pub mod scroll;
