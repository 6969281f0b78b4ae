// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own templates alongside it.

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text containing something
/// like `{where}` is copied through literally. Braces that do not name a known
/// placeholder (e.g. JSON examples inside a prompt) are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let matched = values.iter().find(|(key, _)| {
            tail[1..]
                .strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });

        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
