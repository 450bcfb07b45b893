pub mod catch_all;
