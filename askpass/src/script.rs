//! JavaScript for Automation program shown by `osascript`.

use crate::dialog::DialogSpec;
use serde_json::{Value, json};

pub const SHEBANG: &str = "#!/usr/bin/env osascript -l JavaScript";

/// Exit status the script uses when the dialog is dismissed without the
/// confirm button.
pub const CANCEL_EXIT_CODE: i32 = 255;

fn js_string(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// Renders the dialog as a script suitable for `osascript -l JavaScript -e`.
///
/// String literals are emitted as JSON, which is valid JavaScript, so any
/// message text is safe to embed.
pub fn render(spec: &DialogSpec) -> String {
    let mut options = vec![
        format!("defaultAnswer: {}", js_string(&spec.default_answer)),
        format!("withIcon: {}", js_string(spec.icon.as_str())),
    ];
    if let Some(title) = &spec.title {
        options.push(format!("withTitle: {}", js_string(title)));
    }
    options.push(format!("buttons: {}", json!(spec.buttons())));
    options.push(format!("defaultButton: {}", js_string(spec.default_button())));
    options.push(format!("hiddenAnswer: {}", spec.hidden_answer()));
    let options: String = options
        .iter()
        .map(|option| format!("  {option},\n"))
        .collect();

    format!(
        "ObjC.import('stdlib')\n\
         \n\
         const app = Application.currentApplication()\n\
         app.includeStandardAdditions = true\n\
         \n\
         const result = app.displayDialog({message}, {{\n\
         {options}}})\n\
         \n\
         if (result.buttonReturned === {confirm}) {{\n  \
           result.textReturned\n\
         }} else {{\n  \
           $.exit({CANCEL_EXIT_CODE})\n\
         }}\n",
        message = js_string(&spec.message),
        confirm = js_string(spec.confirm_button()),
    )
}

/// Renders a standalone executable script, shebang included.
pub fn render_executable(spec: &DialogSpec) -> String {
    format!("{SHEBANG}\n\n{}", render(spec))
}
