//! Minimal PDF 1.4 object writer.
//!
//! Objects are numbered up front with [`PdfDocument::reserve`] so that pages can refer
//! to their parent before the page tree is written. [`PdfDocument::finish`] lays out the
//! body, the cross-reference table and the trailer.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write as _;

use super::super::error::Result;

/// A PDF object number; generation is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ObjectId(pub(crate) usize);

impl ObjectId {
    /// Indirect reference syntax, e.g. `3 0 R`.
    pub(crate) fn reference(&self) -> String {
        format!("{} 0 R", self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct PdfDocument {
    // Index 0 is object 1.
    objects: Vec<Option<Vec<u8>>>,
}

impl PdfDocument {
    pub(crate) fn new() -> Self {
        PdfDocument::default()
    }

    /// Allocates an object number to be filled in later with [`PdfDocument::set`].
    pub(crate) fn reserve(&mut self) -> ObjectId {
        self.objects.push(None);
        ObjectId(self.objects.len())
    }

    /// Stores the body of a previously reserved object.
    pub(crate) fn set(&mut self, id: ObjectId, body: impl Into<Vec<u8>>) {
        self.objects[id.0 - 1] = Some(body.into());
    }

    pub(crate) fn add(&mut self, body: impl Into<Vec<u8>>) -> ObjectId {
        let id = self.reserve();
        self.set(id, body);
        id
    }

    /// Adds a Flate-compressed stream object.
    pub(crate) fn add_stream(&mut self, data: &[u8]) -> Result<ObjectId> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;

        let mut body =
            format!("<< /Length {} /Filter /FlateDecode >>\nstream\n", compressed.len()).into_bytes();
        body.extend_from_slice(&compressed);
        body.extend_from_slice(b"\nendstream");
        Ok(self.add(body))
    }

    /// Serializes the document with `root` as the catalog and `info` as the metadata dictionary.
    pub(crate) fn finish(self, root: ObjectId, info: Option<ObjectId>) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (index, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
            match body {
                Some(bytes) => out.extend_from_slice(bytes),
                None => {
                    log::warn!("PDF object {} was reserved but never written", index + 1);
                    out.extend_from_slice(b"null");
                }
            }
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        let size = self.objects.len() + 1;
        out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", size).as_bytes());
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }

        let mut trailer = format!("trailer\n<< /Size {} /Root {}", size, root.reference());
        if let Some(info) = info {
            trailer.push_str(&format!(" /Info {}", info.reference()));
        }
        trailer.push_str(&format!(" >>\nstartxref\n{}\n%%EOF\n", xref_offset));
        out.extend_from_slice(trailer.as_bytes());
        out
    }
}

/// Escapes raw bytes for use inside a PDF literal string `( ... )`.
pub(crate) fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(b'(');
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\n' => out.extend_from_slice(b"\\n"),
            _ => out.push(b),
        }
    }
    out.push(b')');
    out
}
