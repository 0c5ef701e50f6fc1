//! Project README generation
//!
//! Summarises the exported outputs with links relative to the project root, so
//! the README renders correctly on any git host.

use std::path::Path;

use crate::domain::layout::OutputLayout;
use crate::domain::project::Project;
use crate::error::FabResult;
use crate::infrastructure::fs::write_atomic;

/// Render and atomically write the README to `path`.
pub fn write(project: &Project, layout: &OutputLayout, path: &Path) -> FabResult<()> {
    let content = render(project.name(), layout, layout.interactive_bom().is_file());
    write_atomic(path, content.as_bytes())
}

/// Render the README body.
///
/// The interactive BOM is generated outside this tool; it is linked only when
/// `with_ibom` is set.
pub fn render(name: &str, layout: &OutputLayout, with_ibom: bool) -> String {
    let link = |p: &Path| layout.link(p);

    let mut out = format!(
        r#"# {name}

## Generating fabrication outputs

Run the following from the project directory (where `{name}.kicad_pro` is located):

```bash
fabexport
```

To also package the Gerbers for fabrication:

```bash
fabexport release
```

With the Makefile wrapper, `make` and `make release` do the same.

## 3D view
"#
    );

    for (title, path) in [
        ("Top View", layout.render_top()),
        ("Bottom View", layout.render_bottom()),
        ("Perspective View", layout.render_perspective()),
    ] {
        out.push_str(&format!("\n### {}\n\n![]({})\n", title, link(&path)));
    }

    for (title, path) in [
        ("Schematic", layout.schematic_pdf()),
        ("BOM", layout.bom_xlsx()),
        ("Top Assembly", layout.top_assembly()),
        ("Bottom Assembly", layout.bottom_assembly()),
    ] {
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        out.push_str(&format!(
            "\n## {}\n\n[{}]({})\n",
            title,
            file_name,
            link(&path)
        ));
    }

    let gerbers = link(&layout.gerbers_dir());
    out.push_str(&format!(
        "\n## Fabrication\n\nGerbers, drill and pick-and-place files: [{}]({})\n",
        gerbers, gerbers
    ));

    if with_ibom {
        out.push_str(&format!(
            "\n## Interactive BOM\n\nDownload and open [ibom.html]({}) in a browser.\n",
            link(&layout.interactive_bom())
        ));
    }

    out
}
