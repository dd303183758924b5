pub mod inputmap;
