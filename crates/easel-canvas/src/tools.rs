//! Overlay tools mounted above each frame.
//!
//! Built once at render time and handed to the host, which owns the shared
//! tools wrapper. The nodes only carry classes, data hooks and inline
//! styles; the host decides how to materialise them.

/// One element of the overlay tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolNode {
    pub class: String,
    /// Bare `data-*` hooks, without the `data-` prefix.
    pub hooks: Vec<&'static str>,
    pub style: Option<&'static str>,
    pub children: Vec<ToolNode>,
}

impl ToolNode {
    fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            hooks: Vec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    fn hook(mut self, hook: &'static str) -> Self {
        self.hooks.push(hook);
        self
    }

    fn style(mut self, style: &'static str) -> Self {
        self.style = Some(style);
        self
    }

    fn child(mut self, child: ToolNode) -> Self {
        self.children.push(child);
        self
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(&format!("<div class=\"{}\"", self.class));
        for hook in &self.hooks {
            out.push_str(&format!(" data-{hook}"));
        }
        if let Some(style) = self.style {
            out.push_str(&format!(" style=\"{style}\""));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</div>");
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ToolNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// The full overlay for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolsOverlay {
    pub root: ToolNode,
}

impl ToolsOverlay {
    /// Build the overlay with every class prefixed by `ppfx`.
    pub fn new(ppfx: &str) -> Self {
        let p = |name: &str| format!("{ppfx}{name}");

        let root = ToolNode::new(p("tools"))
            .style("pointer-events:none")
            .child(ToolNode::new(p("highlighter")).hook("hl"))
            .child(ToolNode::new(p("badge")).hook("badge"))
            .child(ToolNode::new(p("placeholder")).child(ToolNode::new(p("placeholder-int"))))
            .child(ToolNode::new(p("ghost")))
            .child(ToolNode::new(p("toolbar")).style("pointer-events:all"))
            .child(ToolNode::new(p("resizer")))
            .child(
                ToolNode::new(p("offset-v"))
                    .hook("offset")
                    .child(box_model_sides(
                        ppfx,
                        "margin",
                        ["offset-m-t", "offset-m-b", "offset-m-l", "offset-m-r"],
                    ))
                    .child(box_model_sides(
                        ppfx,
                        "padding",
                        ["offset-p-t", "offset-p-b", "offset-p-l", "offset-p-r"],
                    )),
            )
            .child(ToolNode::new(p("offset-fixed-v")));

        Self { root }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }

    /// First node carrying `data-{hook}`.
    pub fn find_hook(&self, hook: &str) -> Option<&ToolNode> {
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() && node.hooks.iter().any(|h| *h == hook) {
                found = Some(node);
            }
        });
        found
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(&mut |_| count += 1);
        count
    }
}

const SIDES: [&str; 4] = ["top", "bottom", "left", "right"];

/// Margin or padding indicator group with one element per side.
fn box_model_sides(ppfx: &str, kind: &str, hooks: [&'static str; 4]) -> ToolNode {
    SIDES.iter().zip(hooks).fold(
        ToolNode::new(format!("{ppfx}{kind}Name")).hook("offset-m"),
        |group, (side, hook)| {
            group.child(
                ToolNode::new(format!("{ppfx}{kind}-v-el {ppfx}{kind}-v-{side}")).hook(hook),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_has_every_tool() {
        let tools = ToolsOverlay::new("gjs-");
        let html = tools.to_html();
        for class in [
            "gjs-tools",
            "gjs-highlighter",
            "gjs-badge",
            "gjs-placeholder",
            "gjs-placeholder-int",
            "gjs-ghost",
            "gjs-toolbar",
            "gjs-resizer",
            "gjs-offset-v",
            "gjs-offset-fixed-v",
            "gjs-marginName",
            "gjs-paddingName",
        ] {
            assert!(html.contains(&format!("\"{class}\"")), "missing {class}");
        }
        // root, 6 tools + placeholder-int, offset-v + 2 groups + 8 sides, fixed
        assert_eq!(tools.node_count(), 1 + 7 + 11 + 1);
    }

    #[test]
    fn overlay_ignores_pointer_except_toolbar() {
        let tools = ToolsOverlay::new("gjs-");
        assert_eq!(tools.root.style, Some("pointer-events:none"));
        let toolbar = tools
            .root
            .children
            .iter()
            .find(|n| n.class == "gjs-toolbar")
            .unwrap();
        assert_eq!(toolbar.style, Some("pointer-events:all"));
    }

    #[test]
    fn hooks_are_addressable() {
        let tools = ToolsOverlay::new("ed-");
        assert_eq!(tools.find_hook("hl").unwrap().class, "ed-highlighter");
        assert_eq!(tools.find_hook("badge").unwrap().class, "ed-badge");
        assert_eq!(
            tools.find_hook("offset-p-l").unwrap().class,
            "ed-padding-v-el ed-padding-v-left"
        );
        assert!(tools.find_hook("missing").is_none());
    }

    #[test]
    fn html_renders_hooks_as_data_attributes() {
        let html = ToolsOverlay::new("gjs-").to_html();
        assert!(html.starts_with("<div class=\"gjs-tools\" style=\"pointer-events:none\">"));
        assert!(html.contains("<div class=\"gjs-highlighter\" data-hl></div>"));
        assert!(html.contains("data-offset-m-t"));
        assert!(html.ends_with("</div>"));
    }
}
