//! File System Helpers

mod local;

pub use local::{
    hash_file, list_files, persist, remove_file_if_exists, reset_dir, temp_file_beside,
    write_atomic,
};
