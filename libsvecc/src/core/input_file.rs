// Copyright 2025-2026 Neil Henderson
//
//! The `input_file` module defines the [InputFile] type, a command-line file argument split into its
//! directory, stem, and suffix parts.

/// A file named on the command-line, split into `(directory, stem, suffix)`.
///
/// The suffix keeps its leading dot (e.g. `".c"`), and determines which toolchain stage consumes the
/// file. Every stage writes its output into the current working directory using only the stem, so the
/// directory part matters only when reading a file where the caller put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub directory: String,
    pub stem: String,
    pub suffix: String,
}

impl InputFile {
    /// Splits a path into an `InputFile`.
    ///
    /// The suffix is everything from the last dot of the file name onwards. A file name that starts
    /// with its only dot (like `.profile`) has no suffix.
    pub fn split(path: &str) -> Self {
        let (directory, file_name) = match path.rfind('/') {
            Some(pos) => (&path[..pos], &path[pos + 1..]),
            None => ("", path),
        };

        let (stem, suffix) = match file_name.rfind('.') {
            Some(pos) if pos > 0 => (&file_name[..pos], &file_name[pos..]),
            _ => (file_name, ""),
        };

        Self {
            directory: directory.to_string(),
            stem: stem.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The file's path as given on the command-line.
    pub fn path(&self) -> String {
        if self.directory.is_empty() {
            format!("{}{}", self.stem, self.suffix)
        } else {
            format!("{}/{}{}", self.directory, self.stem, self.suffix)
        }
    }

    /// The name of a stage output for this file in the working directory: the stem plus the given
    /// suffix, with the directory part dropped.
    pub fn working_file(&self, suffix: &str) -> String {
        format!("{}{}", self.stem, suffix)
    }

    /// The name of the object file this input eventually becomes (`stem.o`).
    pub fn object_file(&self) -> String {
        self.working_file(".o")
    }
}
