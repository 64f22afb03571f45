use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use super::RenderError;

pub(crate) fn highlight_code(
    token: &str,
    code: &str,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<String, RenderError> {
    let syntax =
        find_syntax(syntax_set, token).unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut code_with_newline = code.to_string();
    if !code_with_newline.ends_with('\n') {
        code_with_newline.push('\n');
    }

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, *class_style);

    for line in LinesWithEndings::from(code_with_newline.as_str()) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|err| RenderError::Highlighting {
                language: token.to_string(),
                message: err.to_string(),
            })?;
    }

    let highlighted = generator.finalize();
    let pre_class = format!("syntax-highlight syntax-lang-{}", token.to_ascii_lowercase());
    let code_class = format!("language-{} syntax-code", token.to_ascii_lowercase());

    Ok(format!(
        "<pre class=\"{pre_class}\" data-language=\"{token}\"><code class=\"{code_class}\">{highlighted}</code></pre>"
    ))
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}
