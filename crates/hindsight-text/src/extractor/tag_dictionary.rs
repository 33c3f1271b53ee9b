//! Domain tag dictionary: tool names and problem-category words.
//!
//! A tag is present when the lowercased text contains one of its patterns as
//! a substring. Extended aliases (CJK spellings) are only consulted when the
//! dictionary is built with `extended = true`.

use std::collections::BTreeSet;

struct TagRule {
    tag: &'static str,
    patterns: &'static [&'static str],
    aliases: &'static [&'static str],
}

const RULES: &[TagRule] = &[
    // Tools and runtimes
    TagRule { tag: "PM2", patterns: &["pm2"], aliases: &[] },
    TagRule { tag: "Docker", patterns: &["docker"], aliases: &["容器"] },
    TagRule { tag: "Kubernetes", patterns: &["kubernetes", "kubectl", "k8s"], aliases: &[] },
    TagRule { tag: "git", patterns: &["git"], aliases: &[] },
    TagRule { tag: "npm", patterns: &["npm"], aliases: &[] },
    TagRule { tag: "Node.js", patterns: &["node.js", "nodejs"], aliases: &[] },
    TagRule { tag: "Python", patterns: &["python", "pip install"], aliases: &[] },
    TagRule { tag: "Rust", patterns: &["rust", "cargo"], aliases: &[] },
    TagRule { tag: "TypeScript", patterns: &["typescript", "tsconfig"], aliases: &[] },
    TagRule { tag: "CommonJS", patterns: &["commonjs", ".cjs", "require("], aliases: &[] },
    TagRule { tag: "ESM", patterns: &["esm", ".mjs", "es module"], aliases: &[] },
    TagRule { tag: "Nginx", patterns: &["nginx"], aliases: &[] },
    TagRule { tag: "PostgreSQL", patterns: &["postgres", "psql"], aliases: &[] },
    TagRule { tag: "MySQL", patterns: &["mysql"], aliases: &[] },
    TagRule { tag: "Redis", patterns: &["redis"], aliases: &[] },
    TagRule { tag: "SQLite", patterns: &["sqlite"], aliases: &[] },
    TagRule { tag: "PowerShell", patterns: &["powershell"], aliases: &[] },
    TagRule { tag: "SSH", patterns: &["ssh"], aliases: &[] },
    TagRule { tag: "Playwright", patterns: &["playwright"], aliases: &[] },
    TagRule { tag: "Selenium", patterns: &["selenium"], aliases: &[] },
    TagRule { tag: "webpack", patterns: &["webpack"], aliases: &[] },
    // Problem domains
    TagRule { tag: "GUI", patterns: &["gui", "user interface"], aliases: &["界面", "图形界面"] },
    TagRule { tag: "screenshot", patterns: &["screenshot", "screen capture", "screencap"], aliases: &["截图", "截屏"] },
    TagRule { tag: "automation", patterns: &["automation", "automate"], aliases: &["自动化"] },
    TagRule { tag: "resolution", patterns: &["resolution", "dpi"], aliases: &["分辨率"] },
    TagRule { tag: "click", patterns: &["click"], aliases: &["点击"] },
    TagRule { tag: "API", patterns: &["api"], aliases: &["接口"] },
    TagRule { tag: "HTTP", patterns: &["http"], aliases: &[] },
    TagRule { tag: "database", patterns: &["database", "sql"], aliases: &["数据库"] },
    TagRule { tag: "config", patterns: &["config", "settings"], aliases: &["配置"] },
    TagRule { tag: "permission", patterns: &["permission", "access denied", "eacces"], aliases: &["权限"] },
    TagRule { tag: "network", patterns: &["network", "connection refused", "dns"], aliases: &["网络"] },
    TagRule { tag: "timeout", patterns: &["timeout", "timed out"], aliases: &["超时"] },
    TagRule { tag: "encoding", patterns: &["encoding", "utf-8", "utf8", "gbk"], aliases: &["编码", "乱码"] },
    TagRule { tag: "memory", patterns: &["memory leak", "out of memory", "oom"], aliases: &["内存"] },
    TagRule { tag: "deploy", patterns: &["deploy"], aliases: &["部署"] },
    TagRule { tag: "performance", patterns: &["performance", "latency", "slow"], aliases: &["性能"] },
    TagRule { tag: "crash", patterns: &["crash", "panic", "segfault"], aliases: &["崩溃"] },
    TagRule { tag: "module", patterns: &["module"], aliases: &["模块"] },
    TagRule { tag: "dependency", patterns: &["dependency", "dependencies", "version conflict"], aliases: &["依赖"] },
    TagRule { tag: "build", patterns: &["build", "compile"], aliases: &["编译", "构建"] },
    TagRule { tag: "startup", patterns: &["startup", "cannot start", "fails to start"], aliases: &["启动"] },
    TagRule { tag: "security", patterns: &["security", "vulnerab", "xss", "csrf"], aliases: &["安全"] },
];

/// Case-insensitive, substring-tolerant tag matcher.
#[derive(Debug, Clone)]
pub struct TagDictionary {
    extended: bool,
}

impl TagDictionary {
    pub fn new(extended: bool) -> Self {
        Self { extended }
    }

    /// Tags whose patterns occur anywhere in `text`.
    pub fn match_tags(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        RULES
            .iter()
            .filter(|rule| {
                rule.patterns.iter().any(|p| lowered.contains(p))
                    || (self.extended && rule.aliases.iter().any(|a| lowered.contains(a)))
            })
            .map(|rule| rule.tag.to_string())
            .collect()
    }

    /// Number of known tags.
    pub fn len(&self) -> usize {
        RULES.len()
    }

    pub fn is_empty(&self) -> bool {
        RULES.is_empty()
    }
}
