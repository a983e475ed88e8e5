//! PDF template backed by `lopdf`.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::debug;

use crate::calculation::PAGE_LAYOUT;
use crate::error::{EngineError, EngineResult};
use crate::models::DrawInstruction;

use super::DocumentAssembler;
use super::overlay::{FONT_RESOURCE, overlay_content};

/// Page box used when a page has no resolvable `MediaBox` (landscape letter).
pub const DEFAULT_MEDIA_BOX: [f32; 4] = [0.0, 0.0, 792.0, 612.0];

/// Limit on `Parent` links followed when resolving inherited attributes.
const MAX_INHERITANCE_DEPTH: usize = 32;

/// Returns the temporary path a document is written to before being moved
/// into place.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use jornada_register::document::partial_path;
///
/// assert_eq!(
///     partial_path(Path::new("registros/enero.pdf")),
///     PathBuf::from("registros/enero.pdf.part")
/// );
/// ```
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

/// A register template loaded into memory.
///
/// Each overlaid page receives a Form XObject holding its labels, drawn
/// from the page's content stream so the original page content is kept.
#[derive(Debug)]
pub struct PdfTemplate {
    document: Document,
    page_ids: Vec<ObjectId>,
    font_id: ObjectId,
}

impl PdfTemplate {
    /// Loads a template from disk.
    ///
    /// Fails with `TemplateNotFound` if the file does not exist and with
    /// `TemplateRead` if it cannot be parsed or has no pages.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EngineError::TemplateNotFound {
                path: path.display().to_string(),
            });
        }

        let document = Document::load(path).map_err(|e| EngineError::TemplateRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let template = Self::from_document(document).map_err(|message| {
            EngineError::TemplateRead {
                path: path.display().to_string(),
                message,
            }
        })?;

        debug!(
            path = %path.display(),
            pages = template.page_ids.len(),
            "Template loaded"
        );
        Ok(template)
    }

    fn from_document(mut document: Document) -> Result<Self, String> {
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Err("template has no pages".to_string());
        }

        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        Ok(Self {
            document,
            page_ids,
            font_id,
        })
    }

    /// Writes the document to `path`.
    ///
    /// The bytes go to a `.part` sibling first, which is renamed over `path`
    /// once complete; on failure the partial file is removed and `path` is
    /// left as it was.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let partial = partial_path(path);

        if let Err(message) = self.write_to(&partial) {
            let _ = fs::remove_file(&partial);
            return Err(EngineError::OutputWrite {
                path: path.display().to_string(),
                message,
            });
        }

        fs::rename(&partial, path).map_err(|e| {
            let _ = fs::remove_file(&partial);
            EngineError::OutputWrite {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        debug!(path = %path.display(), "Document saved");
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), String> {
        let file = File::create(path).map_err(|e| e.to_string())?;
        let mut writer = BufWriter::new(file);
        self.document
            .save_to(&mut writer)
            .map_err(|e| e.to_string())?;
        writer.flush().map_err(|e| e.to_string())
    }

    /// Returns the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn resolve<'a>(&'a self, object: &'a Object) -> Option<&'a Object> {
        match object {
            Object::Reference(id) => self.document.get_object(*id).ok(),
            other => Some(other),
        }
    }

    /// Finds the page's `MediaBox`, following `Parent` links for inherited
    /// values.
    fn media_box(&self, page_id: ObjectId) -> Vec<Object> {
        let mut current = Some(page_id);

        for _ in 0..MAX_INHERITANCE_DEPTH {
            let Some(id) = current else { break };
            let Ok(dict) = self.document.get_dictionary(id) else {
                break;
            };

            let media_box = dict
                .get(b"MediaBox")
                .ok()
                .and_then(|obj| self.resolve(obj))
                .and_then(|obj| obj.as_array().ok());
            if let Some(array) = media_box {
                return array.clone();
            }

            current = dict.get(b"Parent").and_then(Object::as_reference).ok();
        }

        DEFAULT_MEDIA_BOX.iter().map(|&v| v.into()).collect()
    }

    /// Prepends a `q` stream to the page's contents so whatever graphics
    /// state the template leaves behind can be restored before the overlay.
    ///
    /// `Contents` is rewritten as an array, flattening a reference to an
    /// array of streams.
    fn isolate_page_contents(&mut self, page_id: ObjectId) -> lopdf::Result<()> {
        let existing = match self.document.get_dictionary(page_id)?.get(b"Contents") {
            Ok(Object::Reference(id)) => match self.document.get_object(*id) {
                Ok(Object::Array(streams)) => streams.clone(),
                _ => vec![Object::Reference(*id)],
            },
            Ok(Object::Array(streams)) => streams.clone(),
            _ => Vec::new(),
        };

        let save_id = self
            .document
            .add_object(Stream::new(dictionary! {}, b"q\n".to_vec()));
        let mut contents = Vec::with_capacity(existing.len() + 1);
        contents.push(Object::Reference(save_id));
        contents.extend(existing);

        self.document
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)?
            .set("Contents", contents);
        Ok(())
    }

    fn overlay_error(page: usize, error: impl ToString) -> EngineError {
        EngineError::Overlay {
            page,
            message: error.to_string(),
        }
    }
}

impl DocumentAssembler for PdfTemplate {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn overlay_page(&mut self, page_index: usize, draws: &[DrawInstruction]) -> EngineResult<()> {
        if draws.is_empty() {
            return Ok(());
        }

        let page_id = *self
            .page_ids
            .get(page_index)
            .ok_or_else(|| Self::overlay_error(page_index, "page index out of range"))?;

        let content = overlay_content(draws, &PAGE_LAYOUT)
            .map_err(|e| Self::overlay_error(page_index, e))?;

        let form = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Form",
                "BBox" => self.media_box(page_id),
                "Resources" => dictionary! {
                    "Font" => dictionary! {
                        FONT_RESOURCE => self.font_id,
                    },
                },
            },
            content,
        );
        let form_id = self.document.add_object(form);

        let name = format!("Jornada{page_index}");
        self.document
            .add_xobject(page_id, name.as_bytes(), form_id)
            .map_err(|e| Self::overlay_error(page_index, e))?;
        self.isolate_page_contents(page_id)
            .map_err(|e| Self::overlay_error(page_index, e))?;
        self.document
            .add_page_contents(page_id, format!("\nQ q /{name} Do Q").into_bytes())
            .map_err(|e| Self::overlay_error(page_index, e))?;

        debug!(page = page_index, draws = draws.len(), "Page overlaid");
        Ok(())
    }
}
