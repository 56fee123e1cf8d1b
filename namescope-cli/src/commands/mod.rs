pub mod anonymize;
pub mod batch;
pub mod common;
pub mod decode;
pub mod encode;
pub mod fix;
pub mod inspect;
pub mod readable;
