use crate::InquiryDraft;

/// Build the `mailto:` URI that opens the visitor's mail client with the
/// inquiry pre-filled.
///
/// Subject and body are percent-encoded as URI components, so line breaks,
/// `&`, `%` and `=` in the message reach the mail client unchanged. The
/// recipient is inserted as given.
pub fn compose_mailto(draft: &InquiryDraft, recipient: &str, brand_name: &str) -> String {
    let subject = urlencoding::encode(&draft.subject(brand_name)).into_owned();
    let body = urlencoding::encode(&draft.body()).into_owned();

    format!("mailto:{recipient}?subject={subject}&body={body}")
}
