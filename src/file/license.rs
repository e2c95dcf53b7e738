use crate::constants::filenames;
use serde::{Deserialize, Serialize};

const MIT_BODY: &str = "\
Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the “Software”), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKind {
    #[default]
    Mit,
}

/// License boilerplate, always written to `LICENSE`.
#[derive(Debug, Clone)]
pub struct License {
    kind: LicenseKind,
    copyright_period: String,
    copyright_holders: String,
}

impl License {
    pub fn new(
        kind: LicenseKind,
        copyright_period: impl Into<String>,
        copyright_holders: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            copyright_period: copyright_period.into(),
            copyright_holders: copyright_holders.into(),
        }
    }

    pub fn mit(copyright_period: impl Into<String>, copyright_holders: impl Into<String>) -> Self {
        Self::new(LicenseKind::Mit, copyright_period, copyright_holders)
    }

    pub fn name(&self) -> &str {
        filenames::LICENSE
    }

    pub fn kind(&self) -> LicenseKind {
        self.kind
    }

    pub fn render(&self) -> String {
        let body = match self.kind {
            LicenseKind::Mit => MIT_BODY,
        };
        format!("Copyright © {} {}\n\n{body}", self.copyright_period, self.copyright_holders)
    }
}
