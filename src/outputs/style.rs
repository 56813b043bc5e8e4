//! The stylesheet embedded in every generated page.
//!
//! Pages are self-contained apart from the web fonts, so the whole theme
//! ships inline in a `<style>` element.

/// Google Fonts stylesheet for JetBrains Mono and Inter.
pub const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600;700&family=Inter:wght@400;500;600&display=swap";

pub const STYLESHEET: &str = r#"
        :root {
            --bg-primary: #fafafa;
            --bg-secondary: #f5f5f5;
            --bg-terminal: #1a1a1a;
            --text-primary: #1a1a1a;
            --text-secondary: #666666;
            --text-muted: #999999;
            --accent: #2563eb;
            --accent-light: #3b82f6;
            --border: #e5e5e5;
            --border-light: #f0f0f0;
            --star: #f59e0b;
            --code-bg: #f4f4f4;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .terminal-header {
            background: var(--bg-terminal);
            color: #fff;
            padding: 1rem 2rem;
            font-family: 'JetBrains Mono', monospace;
        }

        .terminal-line {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 0.25rem;
        }

        .terminal-prompt {
            color: #10b981;
        }

        .terminal-cursor {
            display: inline-block;
            width: 8px;
            height: 1.2em;
            background: #10b981;
            animation: blink 1s infinite;
            vertical-align: text-bottom;
        }

        @keyframes blink {
            0%, 50% { opacity: 1; }
            51%, 100% { opacity: 0; }
        }

        .nav-container {
            background: var(--bg-secondary);
            border-bottom: 1px solid var(--border);
            padding: 1rem 2rem;
            overflow-x: auto;
        }

        .date-nav {
            display: flex;
            gap: 0.5rem;
            font-family: 'JetBrains Mono', monospace;
            font-size: 0.875rem;
        }

        .date-link {
            padding: 0.5rem 1rem;
            color: var(--text-secondary);
            text-decoration: none;
            border-radius: 4px;
            transition: all 0.2s;
            white-space: nowrap;
        }

        .date-link:hover {
            background: var(--bg-primary);
            color: var(--accent);
        }

        .date-link.active {
            background: var(--accent);
            color: white;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            padding: 3rem 2rem;
        }

        .page-title {
            font-size: 2.5rem;
            font-weight: 700;
            margin-bottom: 0.5rem;
            font-family: 'JetBrains Mono', monospace;
        }

        .page-subtitle {
            color: var(--text-muted);
            font-family: 'JetBrains Mono', monospace;
            margin-bottom: 3rem;
        }

        .summary-section {
            background: var(--bg-secondary);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 3rem;
        }

        .section-title {
            font-size: 0.875rem;
            font-weight: 600;
            color: var(--text-muted);
            text-transform: uppercase;
            letter-spacing: 0.05em;
            margin-bottom: 1rem;
            font-family: 'JetBrains Mono', monospace;
        }

        .summary-item {
            padding: 0.75rem 0;
            border-bottom: 1px solid var(--border);
        }

        .summary-item:last-child {
            border-bottom: none;
        }

        .summary-topic {
            font-weight: 600;
            color: var(--accent);
            margin-right: 0.5rem;
        }

        .summary-content,
        .text-muted {
            color: var(--text-secondary);
        }

        .news-section {
            margin-bottom: 3rem;
        }

        .section-header {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 1.5rem;
            padding-bottom: 0.75rem;
            border-bottom: 2px solid var(--border);
        }

        .section-name {
            font-size: 1.25rem;
            font-weight: 600;
        }

        .star-rating {
            color: var(--star);
            font-size: 0.875rem;
        }

        .section-badge {
            font-family: 'JetBrains Mono', monospace;
            font-size: 0.75rem;
            color: var(--text-muted);
            letter-spacing: 0.05em;
        }

        .news-item {
            padding: 1.5rem;
            margin-bottom: 1rem;
            background: white;
            border: 1px solid var(--border-light);
            border-radius: 8px;
            transition: all 0.2s;
        }

        .news-item:hover {
            border-color: var(--accent);
            box-shadow: 0 4px 12px rgba(37, 99, 235, 0.08);
        }

        .news-header {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            gap: 1rem;
            margin-bottom: 0.75rem;
        }

        .news-title {
            font-size: 1.125rem;
            font-weight: 600;
            color: var(--text-primary);
            text-decoration: none;
            line-height: 1.4;
        }

        .news-title:hover {
            color: var(--accent);
        }

        .news-meta {
            font-family: 'JetBrains Mono', monospace;
            font-size: 0.75rem;
            color: var(--text-muted);
            background: var(--code-bg);
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            white-space: nowrap;
        }

        .news-summary {
            color: var(--text-secondary);
            line-height: 1.7;
        }

        .listing-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1rem;
        }

        .listing-card {
            display: block;
            padding: 1rem 1.25rem;
            background: white;
            border: 1px solid var(--border-light);
            border-radius: 8px;
            color: inherit;
            text-decoration: none;
            transition: all 0.2s;
        }

        a.listing-card:hover {
            border-color: var(--accent);
        }

        .listing-name {
            font-weight: 600;
            margin-bottom: 0.25rem;
        }

        .listing-desc {
            color: var(--text-secondary);
            font-size: 0.875rem;
        }

        .listing-extra {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-top: 0.5rem;
            font-family: 'JetBrains Mono', monospace;
            font-size: 0.75rem;
            color: var(--text-muted);
        }

        .lang-dot {
            display: inline-block;
            width: 10px;
            height: 10px;
            border-radius: 50%;
            margin-right: 0.25rem;
            vertical-align: middle;
        }

        .rank-list {
            list-style: none;
        }

        .rank-item {
            display: flex;
            gap: 1rem;
            padding: 0.75rem 0;
            border-bottom: 1px solid var(--border);
        }

        .rank-no {
            font-family: 'JetBrains Mono', monospace;
            color: var(--accent);
            font-weight: 700;
            min-width: 2rem;
        }

        .rank-item a {
            color: var(--text-primary);
            font-weight: 600;
            text-decoration: none;
        }

        .rank-item a:hover {
            color: var(--accent);
        }

        .footer {
            margin-top: 4rem;
            padding-top: 2rem;
            border-top: 1px solid var(--border);
            text-align: center;
            color: var(--text-muted);
            font-family: 'JetBrains Mono', monospace;
            font-size: 0.875rem;
        }

        @media (max-width: 768px) {
            .container {
                padding: 1.5rem;
            }

            .page-title {
                font-size: 1.75rem;
            }

            .news-header {
                flex-direction: column;
                gap: 0.5rem;
            }

            .nav-container {
                padding: 0.75rem 1rem;
            }
        }
"#;
