use crate::declaration::ServiceForm;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const EMAIL_SUPPORT: &str = "contribute@opentermsarchive.org";

const SUBJECT: &str = "Here is a new service to track in Open Terms Archive";

/// `mailto:` link asking the maintainers to add the service by hand.
pub fn fallback_email(form: &ServiceForm) -> String {
    let body = format!(
        "Hi,

I need you to track \"{}\" of \"{}\" for me.

Here is the url {}

Thank you very much",
        form.document_type(),
        form.name(),
        expert_mode_url(form),
    );

    format!(
        "mailto:{}?subject={}&body={}",
        EMAIL_SUPPORT,
        utf8_percent_encode(SUBJECT, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC)
    )
}

fn expert_mode_url(form: &ServiceForm) -> String {
    match &form.contribution_url {
        Some(url) if url.contains('?') => format!("{}&expertMode=true", url),
        Some(url) => format!("{}?expertMode=true", url),
        None => format!("(no contribution url, fetch {})", form.url),
    }
}
