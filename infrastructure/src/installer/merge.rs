//! Recursive overwrite-copy

use std::fs;
use std::io;
use std::path::Path;

/// Copy the contents of `src` into `dest`, recursing into subdirectories.
///
/// Missing directories under `dest` are created; files with the same
/// relative path are replaced. Files in `dest` that do not exist in `src`
/// are left alone. Returns the number of files copied.
pub fn merge_dir(src: &Path, dest: &Path) -> io::Result<usize> {
    if !src.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", src.display()),
        ));
    }
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += merge_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
