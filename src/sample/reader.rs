use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::Instance;
use crate::error::{ClassifierError, Result};


/// A struct that returns a list of [`Instance`]s.
/// Using this struct, one can read a CSV format file.
///
/// Each row holds the feature values and the label.
/// By default the label is the rightmost column,
/// there is no header row, and no index column.
/// Labels are kept as `String`s.
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use probdist::InstanceReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let instances = InstanceReader::new()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceReader {
    file: Option<PathBuf>,
    has_header: bool,
    has_index_column: bool,
    target_column: Option<usize>,
}


impl InstanceReader {
    /// Construct a new instance of [`InstanceReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the flag whether the first column is a row index
    /// that must be dropped.
    /// Default is `false.`
    pub fn has_index_column(mut self, flag: bool) -> Self {
        self.has_index_column = flag;
        self
    }


    /// Set the column (after dropping the index column)
    /// that is used for the label.
    /// By default, the rightmost column is the label.
    pub fn target_column(mut self, column: usize) -> Self {
        self.target_column = Some(column);
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Vec<Instance<String>>> {
        let file = self.file.as_ref()
            .ok_or_else(|| ClassifierError::Configuration(
                "The file name for csv is not set".into()
            ))?;
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }


    /// Reads the CSV text from `reader` based on the arguments.
    pub fn read_from<R: BufRead>(&self, reader: R)
        -> Result<Vec<Instance<String>>>
    {
        let mut instances = Vec::new();
        let mut n_column = None;
        let mut skip_header = self.has_header;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            if line.trim().is_empty() { continue; }

            if skip_header {
                skip_header = false;
                continue;
            }

            let mut cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();
            if self.has_index_column && !cells.is_empty() {
                cells.remove(0);
            }

            match n_column {
                None => { n_column = Some(cells.len()); },
                Some(n) if n != cells.len() => {
                    return Err(ClassifierError::Parse {
                        line: line_no,
                        message: format!(
                            "expected {n} columns, found {}", cells.len()
                        ),
                    });
                },
                _ => {},
            }

            instances.push(self.parse_row(&cells, line_no)?);
        }

        Ok(instances)
    }


    fn parse_row(&self, cells: &[&str], line_no: usize)
        -> Result<Instance<String>>
    {
        if cells.len() < 2 {
            return Err(ClassifierError::Parse {
                line: line_no,
                message: "a row needs at least one feature and a label".into(),
            });
        }
        let target = self.target_column.unwrap_or(cells.len() - 1);
        if target >= cells.len() {
            return Err(ClassifierError::Parse {
                line: line_no,
                message: format!(
                    "target column {target} is out of range \
                    for {} columns", cells.len()
                ),
            });
        }

        let mut features = Vec::with_capacity(cells.len() - 1);
        for (j, cell) in cells.iter().enumerate() {
            if j == target { continue; }
            let x = cell.parse::<f64>()
                .map_err(|e| ClassifierError::Parse {
                    line: line_no,
                    message: format!("column {j}: `{cell}`: {e}"),
                })?;
            features.push(x);
        }

        Ok(Instance::new(features, cells[target].to_string()))
    }
}


#[cfg(test)]
mod tests {
    use std::io::BufReader;
    use super::*;

    #[test]
    fn test_read_with_header_and_index() {
        let csv = b"\
        id,feat1,feat2,class\n\
        1,0.1,2.0,A\n\
        \n\
        2,0.2,3.5,B\n";
        let instances = InstanceReader::new()
            .has_header(true)
            .has_index_column(true)
            .read_from(BufReader::new(&csv[..]))
            .unwrap();

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].features(), &[0.1, 2.0]);
        assert_eq!(instances[0].label(), Some(&"A".to_string()));
        assert_eq!(instances[1].features(), &[0.2, 3.5]);
    }

    #[test]
    fn test_read_target_column() {
        let csv = b"yes,1.0,2.0\nno,3.0,4.0\n";
        let instances = InstanceReader::new()
            .target_column(0)
            .read_from(BufReader::new(&csv[..]))
            .unwrap();

        assert_eq!(instances[1].features(), &[3.0, 4.0]);
        assert_eq!(instances[1].label(), Some(&"no".to_string()));
    }

    #[test]
    fn test_read_bad_number() {
        let csv = b"1.0,A\nx,B\n";
        let err = InstanceReader::new()
            .read_from(BufReader::new(&csv[..]))
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_read_ragged_rows() {
        let csv = b"1.0,2.0,A\n1.0,B\n";
        let err = InstanceReader::new()
            .read_from(BufReader::new(&csv[..]))
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_read_without_file() {
        assert!(matches!(
            InstanceReader::new().read(),
            Err(ClassifierError::Configuration(_))
        ));
    }
}
