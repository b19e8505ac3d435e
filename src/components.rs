pub mod stockinfo;
