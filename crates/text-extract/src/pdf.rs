//! PDF text extraction via pdf-extract

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pdf_extract::extract_text_from_mem;

use crate::error::ExtractError;

/// Extract the text layer of a PDF.
///
/// Pages are concatenated in order. A PDF without a text layer (scanned
/// images) yields an empty or whitespace-only string, not an error.
/// pdf-extract panics on some malformed documents; those panics surface as
/// [`ExtractError::ExtractionError`].
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| extract_text_from_mem(pdf_bytes)))
        .map_err(|payload| {
            ExtractError::ExtractionError(format!(
                "PDF parser panicked: {}",
                panic_message(payload.as_ref())
            ))
        })?;

    outcome.map_err(|e| {
        let error_msg = e.to_string().to_lowercase();

        if error_msg.contains("encrypted") || error_msg.contains("password") {
            return ExtractError::PasswordProtected;
        }

        if error_msg.contains("invalid")
            || error_msg.contains("malformed")
            || error_msg.contains("corrupt")
            || error_msg.contains("parse")
        {
            return ExtractError::InvalidPdf(e.to_string());
        }

        ExtractError::ExtractionError(e.to_string())
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// One page that selects `/F9` without declaring any font resources
    pub(crate) fn pdf_with_undeclared_font() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F9".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal("The tenant shall pay rent.")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(extract_pdf_text(b"definitely not a pdf").is_err());
    }

    #[test]
    fn test_parser_panic_becomes_error() {
        let err = extract_pdf_text(&pdf_with_undeclared_font()).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionError(_)));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("Font");
        assert_eq!(panic_message(payload.as_ref()), "Font");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bad xref"));
        assert_eq!(panic_message(payload.as_ref()), "bad xref");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
