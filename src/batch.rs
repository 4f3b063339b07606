//! Sequential batch reading of mail files.

use std::path::Path;

use crate::{log::Record, mail};

/// Opens and fully reads each mail file in order, tolerating per-file
/// failures without aborting the batch.
///
/// Each file's contents are read into a buffer sized to its byte length and
/// dropped again; what happens to the text afterwards is for a later stage.
/// A failed open records `File <path> not found in read_all` to the recorder,
/// a failed read after a successful open records
/// `Could open, but not read file <path> in read_all`, and in both cases the
/// batch moves on to the next path.
///
/// # Examples
///
/// ```
/// use mail_corpus::{Log, read_all};
///
/// # fn example() {
/// let paths = ["inbox/0001.txt", "inbox/0002.txt"];
/// read_all(&paths, &mut Log::stdout());
/// # }
/// ```
pub fn read_all<I, P, R>(paths: I, recorder: &mut R)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    R: Record + ?Sized,
{
    for path in paths {
        let path = path.as_ref();

        match mail::read(path) {
            Ok(_) => {}
            Err(err) if err.is_not_found() => {
                recorder.record(&format!("File {} not found in read_all", path.display()));
            }
            Err(_) => {
                recorder.record(&format!(
                    "Could open, but not read file {} in read_all",
                    path.display()
                ));
            }
        }
    }
}
