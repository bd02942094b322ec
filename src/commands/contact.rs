//! Contact form from the command line

use anyhow::Result;

use folio::site::ContactForm;

use super::Output;

/// Validate the message and print the acknowledgement.
///
/// Nothing is sent anywhere.
pub fn handle(name: String, email: String, message: String) -> Result<()> {
    let mut form = ContactForm::new(name, email, message);
    let acknowledgement = form.submit()?;

    let out = Output::detect();
    println!("{}", out.success(acknowledgement));
    Ok(())
}
