//! Loading formatter profiles and writing formatted output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Decorations, Formatter};
use crate::error::OutputError;
use crate::style::Style;

impl Formatter {
    /// Creates a formatter from a YAML [`Decorations`] profile.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Profile`] if the YAML does not describe a profile.
    pub fn from_yaml(yaml: &str) -> Result<Self, OutputError> {
        let decorations: Decorations = serde_yaml::from_str(yaml)?;
        Ok(Self::with_decorations(decorations))
    }

    /// Reads a YAML profile from disk.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the file cannot be read, and
    /// [`OutputError::Profile`] if it does not parse.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, OutputError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Formats `styles` and writes the text to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Sink`] if the writer fails.
    pub fn format_to_writer<'s, W: Write>(
        &self,
        styles: impl IntoIterator<Item = &'s Style>,
        mut writer: W,
    ) -> Result<(), OutputError> {
        let css = self.format(styles);
        writer.write_all(css.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Formats `styles` into the file at `path`, creating missing parent
    /// directories and replacing any existing file. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] naming the path that could not be written.
    pub fn format_to_path<'s>(
        &self,
        styles: impl IntoIterator<Item = &'s Style>,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, OutputError> {
        let path = path.as_ref();
        let css = self.format(styles);

        let io_error = |source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, css.as_bytes()).map_err(io_error)?;

        tracing::debug!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> Style {
        Style::named("sample", |s| {
            s.declare("color", "black");
        })
    }

    #[test]
    fn test_from_yaml() {
        let formatter = Formatter::from_yaml("after_selector: \"  \"\n").unwrap();
        let css = formatter.format(&[sample()]);
        assert_eq!(css, ".sample  {color:black;}");
    }

    #[test]
    fn test_from_yaml_rejects_garbage() {
        let result = Formatter::from_yaml("comment: [1, 2");
        assert!(matches!(result, Err(OutputError::Profile(_))));
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        match Formatter::from_yaml_file(&path) {
            Err(OutputError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_to_writer() {
        let mut buffer = Vec::new();
        Formatter::compact()
            .format_to_writer(&[sample()], &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), ".sample{color:black;}");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_to_writer_failure() {
        let result = Formatter::compact().format_to_writer(&[sample()], FailingWriter);
        assert!(matches!(result, Err(OutputError::Sink(_))));
    }

    #[test]
    fn test_format_to_path_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/site.css");

        let written = Formatter::compact().format_to_path(&[sample()], &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), ".sample{color:black;}");

        Formatter::pretty().format_to_path(&[sample()], &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ".sample {\n\tcolor: black;\n}\n\n"
        );
    }

    #[test]
    fn test_format_to_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("site.css");

        match Formatter::compact().format_to_path(&[sample()], &path) {
            Err(OutputError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
