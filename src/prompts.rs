pub const INFOGRAPHIC: &str = include_str!("../data/prompts/infographic.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is single-pass: braces inside a substituted value are copied
/// through untouched. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

/// Build the text-to-image prompt for one faith/SDG pairing.
pub fn compose_infographic_prompt(faith: &str, sdg: &str, description: &str) -> String {
    let extra = if description.is_empty() {
        String::new()
    } else {
        format!("Extra context: {}", description)
    };

    render(
        INFOGRAPHIC,
        &[("faith", faith), ("sdg", sdg), ("extra", &extra)],
    )
}
