//! Static page shell. Everything here is data; the only inputs are page text,
//! the fallback list markup and the script data literal.

use crate::models::PageText;

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Vazirmatn", Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 2rem;
        }

        .container {
            max-width: 800px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            overflow: hidden;
        }

        header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 2rem;
            text-align: center;
        }

        header h1 { font-size: 2rem; margin-bottom: 0.5rem; }
        header p { opacity: 0.9; font-size: 1rem; }

        .directory-list { padding: 2rem; }

        .directory-item {
            display: block;
            padding: 1.25rem 1.5rem;
            margin-bottom: 1rem;
            background: #f8f9fa;
            border: 2px solid #e9ecef;
            border-radius: 8px;
            text-decoration: none;
            color: #495057;
            transition: all 0.3s ease;
            font-size: 1.1rem;
            font-weight: 500;
        }

        .directory-item:hover {
            background: #667eea;
            color: white;
            border-color: #667eea;
            transform: translateX(10px);
            box-shadow: 0 4px 12px rgba(102, 126, 234, 0.3);
        }

        [dir="rtl"] .directory-item:hover { transform: translateX(-10px); }

        .directory-item::before {
            content: "📁";
            margin-inline-end: 1rem;
            font-size: 1.3rem;
        }

        .directory-item:hover::before { content: "📂"; }

        .empty-state {
            text-align: center;
            padding: 3rem;
            color: #6c757d;
        }

        footer {
            text-align: center;
            padding: 1.5rem;
            color: #6c757d;
            font-size: 0.9rem;
            border-top: 1px solid #e9ecef;
        }

        .badge {
            background: #667eea;
            color: white;
            padding: 0.25rem 0.75rem;
            border-radius: 12px;
            font-size: 0.85rem;
            margin-inline-start: 0.5rem;
        }

        @media (max-width: 600px) {
            body { padding: 1rem; }
            header h1 { font-size: 1.5rem; }
            .directory-list { padding: 1rem; }
            .directory-item { padding: 1rem; font-size: 1rem; }
        }
"#;

const SCRIPT_BODY: &str = r#"
        const directoryList = document.getElementById("directoryList");
        const emptyState = document.getElementById("emptyState");
        if (directories.length === 0) {
            emptyState.hidden = false;
        } else {
            for (const directory of directories) {
                const link = document.createElement("a");
                link.href = directory.href;
                link.className = "directory-item";
                link.textContent = directory.name;
                directoryList.appendChild(link);
            }
        }
"#;

/// Assembles the complete document
pub fn page(text: &PageText, fallback: &str, data_literal: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{heading}</h1>
            <p>{subtitle}</p>
        </header>

        <div class="directory-list" id="directoryList">
            <div class="empty-state" id="emptyState" hidden>
                <p>{empty_message}</p>
            </div>
            <noscript>
{fallback}            </noscript>
        </div>

        <footer>
            <p>{footer} <span class="badge">{badge}</span></p>
        </footer>
    </div>

    <script>
        const directories = {data_literal};
{script}    </script>
</body>
</html>
"#,
        lang = text.lang,
        dir = text.dir,
        title = text.title,
        heading = text.heading,
        subtitle = text.subtitle,
        empty_message = text.empty_message,
        footer = text.footer,
        badge = text.badge,
        style = STYLE,
        script = SCRIPT_BODY,
    )
}
