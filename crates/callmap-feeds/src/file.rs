//! File feed — reads records from a dependency file such as `res.deps`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use callmap_core::Error;

use crate::lines::UniversalLines;
use crate::{LineFeed, Lines};

#[derive(Debug)]
pub struct FileFeed {
    path: PathBuf,
    reader: BufReader<File>,
}

impl FileFeed {
    pub fn open(path: impl AsRef<Path>) -> callmap_core::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }
}

impl LineFeed for FileFeed {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn lines(self: Box<Self>) -> Lines {
        Box::new(UniversalLines::new(self.reader))
    }
}
