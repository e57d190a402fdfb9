//! Export: render the synthesized book as JSON or Markdown.

use noesis_core::errors::NoesisResult;
use noesis_core::models::{ExportFormat, ExportedDocument, SynthesizedBook};

fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if (c == ' ' || c == '-' || c == '_') && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

fn to_markdown(book: &SynthesizedBook) -> String {
    let mut md = format!("# {}\n\n*{}*\n", book.title, book.subtitle);
    md.push_str(&format!(
        "\nGenerated {} from {} source books.\n",
        book.generated_at.format("%Y-%m-%d"),
        book.source_books
    ));

    let mut current_part = String::new();
    for chapter in &book.chapters {
        if chapter.part != current_part {
            current_part = chapter.part.clone();
            md.push_str(&format!("\n## {current_part}\n"));
        }
        md.push_str(&format!("\n### {}\n", chapter.title));
        if let Some(epigraph) = &chapter.epigraph {
            md.push_str(&format!("\n> {} — *{}*\n", epigraph.text, epigraph.author));
        }
        md.push_str(&format!("\n{}\n", chapter.body));
        if let Some(question) = &chapter.closing_question {
            md.push_str(&format!("\n*{question}*\n"));
        }
    }

    if !book.practices.is_empty() {
        md.push_str("\n## Practices\n");
        let mut current_category = String::new();
        for practice in &book.practices {
            if practice.category != current_category {
                current_category = practice.category.clone();
                md.push_str(&format!("\n### {current_category}\n"));
            }
            md.push_str(&format!(
                "\n{}. **{}** — {}\n",
                practice.number, practice.title, practice.description
            ));
            for step in &practice.steps {
                md.push_str(&format!("   - {step}\n"));
            }
        }
    }

    if !book.glossary.is_empty() {
        md.push_str("\n## Glossary\n\n");
        for entry in &book.glossary {
            md.push_str(&format!("- **{}** — {}\n", entry.term, entry.definition));
        }
    }
    md
}

/// Render the book in the requested format.
pub fn export_book(book: &SynthesizedBook, format: ExportFormat) -> NoesisResult<ExportedDocument> {
    let (content, extension) = match format {
        ExportFormat::Json => (serde_json::to_string_pretty(book)?, "json"),
        ExportFormat::Markdown => (to_markdown(book), "md"),
    };
    Ok(ExportedDocument {
        format,
        content,
        filename: format!("{}.{extension}", slug(&book.title)),
    })
}
