use crate::domain::slug::SlugGenerator;
use slug::slugify;

/// ASCII transliterating slugifier from the `slug` crate.
#[derive(Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_hyphenated_lowercase() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Web Development"), "web-development");
        assert_eq!(slugger.slugify("  Café & Bar!! "), "cafe-bar");
        assert_eq!(slugger.slugify("!!!"), "");
    }
}
