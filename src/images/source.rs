use crate::images::consts::RESIZED_FILE_SUFFIX;
use url::Url;

/// The image link split into the parts the pipeline needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub url: Url,
    /// Last path segment without its extension.
    pub base_name: String,
    /// Everything from the last `.` of the last path segment on, or empty.
    pub extension: String,
}

impl SourceImage {
    pub fn parse(image_link: &str) -> Result<Self, String> {
        let url = Url::parse(image_link.trim()).map_err(|err| err.to_string())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme `{}`", url.scheme()));
        }
        let file_name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();
        let (base_name, extension) = match file_name.rfind('.') {
            Some(dot) => (file_name[..dot].to_string(), file_name[dot..].to_string()),
            None => (file_name, String::new()),
        };
        Ok(Self {
            url,
            base_name,
            extension,
        })
    }

    /// `cat.png` becomes `cat-resized.png`; `.jpeg` inputs keep their `.jpeg` suffix.
    pub fn resized_file_name(&self) -> String {
        format!("{}{}{}", self.base_name, RESIZED_FILE_SUFFIX, self.extension)
    }
}
