// Built-in project records driving the carousel.
//
// The catalog is ordered, read-only and loaded once at start; the view
// store only ever holds an index into it.

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub screenshot: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "neon-breacher",
        title: "Neon Breacher",
        description: "Zero-Asset Arcade Shooter with high-intensity particle effects.",
        tech: &["React", "Three.js", "Canvas"],
        screenshot: "/projects/neonbreacher.jpg",
        repo_url: "https://github.com/Manuele-T/neon-breacher",
    },
    Project {
        id: "codewise-ai-reviewer",
        title: "Codewise AI Reviewer",
        description: "AI-powered code review assistant providing detailed code feedback.",
        tech: &["AI", "GitHub Actions", "Automation"],
        screenshot: "/projects/codewise.jpg",
        repo_url: "https://github.com/Manuele-T/codewise-ai-reviewer",
    },
    Project {
        id: "ai-marketing-agent",
        title: "AI Marketing Agent",
        description: "Autonomous agent designed to optimize marketing campaigns and content generation.",
        tech: &["Python", "LLM", "LangChain"],
        screenshot: "/projects/marketingagent.jpg",
        repo_url: "https://github.com/Manuele-T/AI_Marketing_Agent",
    },
    Project {
        id: "local-mcp-file-analysis",
        title: "Local MCP File Analysis",
        description: "Model Context Protocol server for secure local file system analysis.",
        tech: &["TypeScript", "MCP", "Node.js"],
        screenshot: "/projects/mcpfileanalysis.jpg",
        repo_url: "https://github.com/Manuele-T/Local-MCP-File-Analysis-Server",
    },
    Project {
        id: "n8n-ai-news",
        title: "N8N AI News",
        description: "Automated news aggregation and summarization workflow built with n8n.",
        tech: &["n8n", "AI", "Webhooks"],
        screenshot: "/projects/n8nainews.jpg",
        repo_url: "https://github.com/Manuele-T/N8N_AI_News",
    },
    Project {
        id: "recipes-chatbot",
        title: "Recipes Chatbot",
        description: "Interactive AI chatbot for recipe discovery and cooking assistance.",
        tech: &["React", "OpenAI", "Tailwind"],
        screenshot: "/projects/recipeschatbot.jpg",
        repo_url: "https://github.com/Manuele-T/Recipes_Chatbot",
    },
];
