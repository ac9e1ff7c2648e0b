use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use flate2::read::MultiGzDecoder;

/// An input file opened for reading, transparently decompressed if needed.
pub enum Input {
    PlainText(File),
    Gzip(MultiGzDecoder<File>),
}

impl Input {
    pub fn buffered(self) -> Box<dyn BufRead + Send + Sync + 'static> {
        match self {
            Input::PlainText(file) => Box::new(BufReader::new(file)),
            Input::Gzip(decoder) => Box::new(BufReader::new(decoder)),
        }
    }
}

/// Opens the file at `path`, sniffing its signature to decide whether it is gzip-compressed.
/// Anything that is not recognised as gzip is read as plain text.
pub fn read_file(path: impl AsRef<Path>) -> Result<Input> {
    let path = path.as_ref();
    ensure!(path.exists(), "File {} does not exist", path.display());

    let kind = infer::get_from_path(path)
        .wrap_err_with(|| format!("Failed to read the signature of {}", path.display()))?;
    let file =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;

    let input = match kind.map(|x| (x.extension(), x.mime_type())) {
        Some(("gz", "application/gzip")) => {
            log::debug!("Reading gzip-compressed input: {}", path.display());
            Input::Gzip(MultiGzDecoder::new(file))
        }
        _ => Input::PlainText(file),
    };
    Ok(input)
}
