//! Plain-text rendering of the page: header, form, post list, footer.

use std::fmt::{self, Write};

use posts_core::{Field, FormMode, FormState, Post};

pub const HEADER: &str = "CONTOH REST API";
pub const FOOTER: &str = "Contoh REST API - posts client";

const RULE: &str = "------------------------------------------------------------";

pub fn render(form: &FormState, posts: &[Post]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_page(&mut out, form, posts)?;
    Ok(out)
}

fn write_page(out: &mut String, form: &FormState, posts: &[Post]) -> fmt::Result {
    writeln!(out, "{RULE}\n {HEADER}\n{RULE}")?;
    write_form(out, form)?;
    write_list(out, posts)?;
    writeln!(out, "{RULE}\n {FOOTER}\n{RULE}")
}

fn write_form(out: &mut String, form: &FormState) -> fmt::Result {
    writeln!(out, "\n== {} ==", form.mode.heading())?;
    if form.mode != FormMode::Create {
        if let Some(id) = &form.draft.id {
            writeln!(out, "  id        : {id}")?;
        }
    }
    write_field(out, form, Field::Judul, &form.draft.title)?;
    write_field(out, form, Field::Deskripsi, &form.draft.description)?;
    writeln!(out, "  [{}]", form.mode.submit_label())
}

fn write_field(out: &mut String, form: &FormState, field: Field, value: &str) -> fmt::Result {
    let shown = if value.is_empty() { "(empty)" } else { value };
    writeln!(out, "  {:<10}: {shown}", field.name())?;
    if let Some(message) = form.errors.get(&field) {
        writeln!(out, "  {:<10}  ! {message}", "")?;
    }
    Ok(())
}

fn write_list(out: &mut String, posts: &[Post]) -> fmt::Result {
    writeln!(out, "\n== Post List ==")?;
    if posts.is_empty() {
        writeln!(out, "  (no posts)")?;
    }
    for post in posts {
        writeln!(out, "  [{}] {}", post.id, first_line(&post.title))?;
        writeln!(out, "      {}", first_line(&post.description))?;
    }
    writeln!(out)
}

/// List cards show one line per field.
fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use posts_core::{PostId, SubmitRejection};

    use super::*;

    fn post(id: u64, title: &str, description: &str) -> Post {
        Post {
            id: PostId::from(id),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn renders_header_and_footer() {
        let page = render(&FormState::new(), &[]).unwrap();
        assert!(page.contains(HEADER));
        assert!(page.contains(FOOTER));
        assert!(page.find(HEADER).unwrap() < page.find("Add New Post").unwrap());
        assert!(page.find("Post List").unwrap() < page.find(FOOTER).unwrap());
    }

    #[test]
    fn create_form_shows_labels_and_empty_list() {
        let page = render(&FormState::new(), &[]).unwrap();
        assert!(page.contains("== Add New Post =="));
        assert!(page.contains("[Create]"));
        assert!(page.contains("(no posts)"));
        assert!(!page.contains("id        :"));
    }

    #[test]
    fn edit_form_shows_id_and_mode() {
        let mut form = FormState::new();
        form.select(&post(5, "T", "D"), FormMode::PartialUpdate);
        let page = render(&form, &[]).unwrap();
        assert!(page.contains("== Update Post Partially =="));
        assert!(page.contains("id        : 5"));
        assert!(page.contains("[Update Partially]"));
    }

    #[test]
    fn errors_render_inline() {
        let mut form = FormState::new();
        assert!(matches!(form.prepare_submit(), Err(SubmitRejection::Invalid(_))));
        let page = render(&form, &[]).unwrap();
        assert!(page.contains("! Judul tidak boleh kosong"));
        assert!(page.contains("! Deskripsi tidak boleh kosong"));
    }

    #[test]
    fn list_shows_first_line_of_each_post() {
        let page = render(&FormState::new(), &[post(1, "A", "baris satu\nbaris dua"), post(2, "B", "b")]).unwrap();
        assert!(page.contains("[1] A"));
        assert!(page.contains("baris satu"));
        assert!(!page.contains("baris dua"));
        assert!(page.find("[1] A").unwrap() < page.find("[2] B").unwrap());
    }
}
