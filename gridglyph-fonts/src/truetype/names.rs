//! Naming metadata embedded in generated fonts.

use gridglyph_config::GridShape;

const DESIGNER: &str = "Roman Sitelew";
const LICENSE: &str = "Public Domain license, no restrictions on use";

/// Strings written to the `name` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNames {
    pub family: String,
    pub style: String,
    pub unique_id: String,
    pub full_name: String,
    pub version: String,
    pub postscript_name: String,
    pub designer: String,
    pub copyright: String,
    pub license: String,
}

impl FontNames {
    /// Standard names for a shape's font variant.
    pub fn for_shape(shape: GridShape) -> Self {
        let family = shape.font_family_name();
        Self {
            style: "Regular".to_string(),
            unique_id: family.clone(),
            full_name: family.clone(),
            version: "Version 1.0".to_string(),
            postscript_name: family.replace(' ', ""),
            designer: DESIGNER.to_string(),
            copyright: format!("Created by {DESIGNER}. {LICENSE}"),
            license: LICENSE.to_string(),
            family,
        }
    }

    /// `(nameID, value)` pairs sorted by name id.
    pub fn records(&self) -> Vec<(u16, &str)> {
        vec![
            (0, self.copyright.as_str()),
            (1, self.family.as_str()),
            (2, self.style.as_str()),
            (3, self.unique_id.as_str()),
            (4, self.full_name.as_str()),
            (5, self.version.as_str()),
            (6, self.postscript_name.as_str()),
            (9, self.designer.as_str()),
            (13, self.license.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_for_shape() {
        let names = FontNames::for_shape(GridShape::Rows4Cols3);
        assert_eq!(names.family, "Times Sitelew Roman 4x3 pixels");
        assert_eq!(names.postscript_name, "TimesSitelewRoman4x3pixels");
        assert_eq!(
            names.copyright,
            "Created by Roman Sitelew. Public Domain license, no restrictions on use"
        );
        let ids: Vec<u16> = names.records().iter().map(|(id, _)| *id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
