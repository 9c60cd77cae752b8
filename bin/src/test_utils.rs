use blocknav_tree::{Workspace, WorkspaceLayout};

/// A repeat loop with a number plugged into TIMES and a print nested in DO,
/// followed by a second print, plus a lone hat block as a second stack.
pub const SAMPLE_LAYOUT: &str = r#"
[[stacks]]
[[stacks.blocks]]
label = "loop"
type = "repeat"
previous = true
next = true

[[stacks.blocks.inputs]]
name = "TIMES"
kind = "value"
fields = [{ name = "mode" }, { name = "times", editable = false }]

[[stacks.blocks.inputs.blocks]]
label = "count"
type = "math_number"
output = true
inputs = [{ name = "UNIT", kind = "dummy", fields = [{ name = "unit" }] }]

[[stacks.blocks.inputs]]
name = "DO"
kind = "statement"
fields = [{ name = "do", editable = false }]

[[stacks.blocks.inputs.blocks]]
label = "body"
type = "print"
previous = true
next = true

[[stacks.blocks]]
label = "after"
type = "print"
previous = true
next = true

[[stacks]]
[[stacks.blocks]]
label = "start"
type = "event_start"
next = true
"#;

pub fn sample_workspace() -> Workspace {
    let layout: WorkspaceLayout = toml::from_str(SAMPLE_LAYOUT).unwrap();
    Workspace::from_layout(&layout).unwrap()
}
