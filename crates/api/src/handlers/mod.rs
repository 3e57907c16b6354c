pub mod tours;
