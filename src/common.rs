use handlebars::Handlebars;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_string_to_file(filename: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
    let mut file = File::create(filename.as_ref())?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    // Missing template variables are errors, not empty strings
    handlebars.set_strict_mode(true);
    handlebars
}
