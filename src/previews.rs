//! Hand-maintained preview descriptions for known documents.
//!
//! The docs themselves carry no machine-readable summary, so the index cards
//! use this table: filename → one-sentence description, written by hand when
//! a document is added. Unknown filenames get [`GENERIC_PREVIEW`]. The table
//! is compiled in — it changes when the docs change, which already means a
//! rebuild, so there is nothing to gain from loading it at runtime.

/// Fallback description for documents without a table entry.
pub const GENERIC_PREVIEW: &str = "技术文档内容";

const PREVIEWS: &[(&str, &str)] = &[
    (
        "jvm-desc.html",
        "深入探讨JVM中所有类型的描述符，包括基础类型、对象类型、数组类型以及方法描述符，并提供详尽的示例。",
    ),
    (
        "classloader.html",
        "从 JVM 启动到自定义实现的全景透视，详细解析类加载器的工作原理和双亲委派机制。",
    ),
    (
        "springboot-start.html",
        "详细分析 Spring Boot/Cloud 应用的启动流程，包括上下文层级结构和环境属性源的优先级。",
    ),
    ("report.html", "关于 JVM 类加载和执行子系统的详细技术报告。"),
    ("myclassloader.html", "自定义类加载器的实现方式和应用场景分析。"),
    ("loaderDemo.html", "类加载器工作原理的演示和实例分析。"),
    ("maven-report.html", "Maven 项目的依赖分析和技术报告。"),
    ("t6-manage-spring.context.html", "Spring 应用上下文的管理和配置分析。"),
    ("java.net.preferIPv4Stack.html", "Java 网络协议栈配置参数详解。"),
];

/// Look up the preview description for a document filename.
pub fn preview_for(filename: &str) -> &'static str {
    PREVIEWS
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, desc)| *desc)
        .unwrap_or(GENERIC_PREVIEW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_filename_gets_its_entry() {
        assert!(preview_for("classloader.html").contains("类加载器"));
    }

    #[test]
    fn unknown_filename_gets_generic_preview() {
        assert_eq!(preview_for("unknown.html"), GENERIC_PREVIEW);
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        assert_eq!(preview_for("report.html.bak"), GENERIC_PREVIEW);
        assert_eq!(preview_for("sub/report.html"), GENERIC_PREVIEW);
    }
}
