//! Built-in AI tool and trend tables.
//!
//! These lists change by hand, not per run, so they live here as immutable
//! data rather than behind a cache file.

use crate::models::{AiTool, AiTrend};

struct ToolRow {
    name: &'static str,
    url: &'static str,
    description: &'static str,
    category: &'static str,
}

struct TrendRow {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    category: &'static str,
}

const TOOLS: &[ToolRow] = &[
    ToolRow { name: "ChatGPT", url: "https://chatgpt.com", description: "通用对话助手，支持联网、代码与多模态", category: "对话" },
    ToolRow { name: "Claude", url: "https://claude.ai", description: "长上下文写作与代码助手", category: "对话" },
    ToolRow { name: "Gemini", url: "https://gemini.google.com", description: "Google 多模态助手", category: "对话" },
    ToolRow { name: "Perplexity", url: "https://www.perplexity.ai", description: "带引用来源的 AI 搜索", category: "搜索" },
    ToolRow { name: "Cursor", url: "https://cursor.com", description: "AI 原生代码编辑器", category: "编程" },
    ToolRow { name: "GitHub Copilot", url: "https://github.com/features/copilot", description: "IDE 内联代码补全与对话", category: "编程" },
    ToolRow { name: "v0", url: "https://v0.dev", description: "从描述生成前端界面", category: "编程" },
    ToolRow { name: "Midjourney", url: "https://www.midjourney.com", description: "高质量图像生成", category: "图像" },
    ToolRow { name: "Ideogram", url: "https://ideogram.ai", description: "擅长文字排版的图像生成", category: "图像" },
    ToolRow { name: "Runway", url: "https://runwayml.com", description: "视频生成与编辑", category: "视频" },
    ToolRow { name: "Suno", url: "https://suno.com", description: "歌曲与配乐生成", category: "音频" },
    ToolRow { name: "ElevenLabs", url: "https://elevenlabs.io", description: "语音合成与配音", category: "音频" },
    ToolRow { name: "NotebookLM", url: "https://notebooklm.google.com", description: "基于资料的笔记与播客摘要", category: "效率" },
    ToolRow { name: "Gamma", url: "https://gamma.app", description: "一键生成演示文稿", category: "效率" },
    ToolRow { name: "Notion AI", url: "https://www.notion.so/product/ai", description: "文档内写作与问答", category: "效率" },
    ToolRow { name: "Ollama", url: "https://ollama.com", description: "本地运行开源大模型", category: "开发" },
    ToolRow { name: "Hugging Face", url: "https://huggingface.co", description: "模型、数据集与 Spaces 社区", category: "开发" },
    ToolRow { name: "LangChain", url: "https://www.langchain.com", description: "LLM 应用与 Agent 框架", category: "开发" },
];

const TRENDS: &[TrendRow] = &[
    TrendRow { title: "AI Agents", url: "https://www.anthropic.com/research/building-effective-agents", description: "从对话走向自主执行多步任务", category: "应用" },
    TrendRow { title: "Model Context Protocol", url: "https://modelcontextprotocol.io", description: "统一模型与外部工具、数据源的连接方式", category: "生态" },
    TrendRow { title: "推理模型", url: "", description: "以更多推理时计算换取复杂问题上的准确率", category: "模型" },
    TrendRow { title: "端侧小模型", url: "", description: "在手机与笔记本上本地运行的轻量模型", category: "部署" },
    TrendRow { title: "多模态生成", url: "", description: "文本、图像、音频、视频在同一模型中生成", category: "模型" },
    TrendRow { title: "AI 编程", url: "", description: "代码助手从补全走向整仓库级修改", category: "应用" },
];

/// The built-in AI tool list, in display order.
pub fn ai_tools() -> Vec<AiTool> {
    TOOLS
        .iter()
        .map(|row| AiTool {
            name: row.name.to_string(),
            url: row.url.to_string(),
            description: row.description.to_string(),
            category: row.category.to_string(),
        })
        .collect()
}

/// The built-in AI trend list, in display order.
pub fn ai_trends() -> Vec<AiTrend> {
    TRENDS
        .iter()
        .map(|row| AiTrend {
            title: row.title.to_string(),
            url: row.url.to_string(),
            description: row.description.to_string(),
            category: row.category.to_string(),
        })
        .collect()
}
