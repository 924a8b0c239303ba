use crate::model::Step;
use html_escape::encode_text;

/// Render a step tree as nested ordered lists.
///
/// Every step becomes an `<li>` tagged with its nesting level. A group
/// renders its label followed by its substeps one level deeper, inside the
/// same item. An empty sequence renders nothing.
pub fn render_steps(steps: &[Step], level: usize) -> String {
    let mut html = String::new();
    write_steps(&mut html, steps, level);
    html
}

fn write_steps(html: &mut String, steps: &[Step], level: usize) {
    if steps.is_empty() {
        return;
    }

    html.push_str(&format!(r#"<ol class="step-list level-{}">"#, level));
    for step in steps {
        html.push_str(&format!(
            r#"<li class="step level-{}">{}"#,
            level,
            encode_text(step.label())
        ));
        write_steps(html, step.substeps(), level + 1);
        html.push_str("</li>");
    }
    html.push_str("</ol>");
}

/// One entry of a flattened step tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineItem<'a> {
    pub level: usize,
    pub text: &'a str,
    pub has_substeps: bool,
}

/// Lazy pre-order walk over a step tree.
///
/// Uses an explicit stack, so depth is bounded by memory rather than the
/// call stack. Clone it to walk the same tree again.
#[derive(Debug, Clone)]
pub struct StepOutline<'a> {
    stack: Vec<(usize, std::slice::Iter<'a, Step>)>,
}

impl<'a> StepOutline<'a> {
    pub fn new(steps: &'a [Step]) -> Self {
        Self {
            stack: vec![(0, steps.iter())],
        }
    }
}

impl<'a> Iterator for StepOutline<'a> {
    type Item = OutlineItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (level, steps) = self.stack.last_mut()?;
            let level = *level;

            match steps.next() {
                Some(step) => {
                    let substeps = step.substeps();
                    if !substeps.is_empty() {
                        self.stack.push((level + 1, substeps.iter()));
                    }
                    return Some(OutlineItem {
                        level,
                        text: step.label(),
                        has_substeps: !substeps.is_empty(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
