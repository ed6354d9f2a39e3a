use super::StepContext;
use crate::error::{Error, Result};
use crate::ioutils::{create_dir_all, write_file};
use crate::preset::files_path;
use crate::template::{operation::TemplateOperation, processor::TemplateProcessor};
use serde_json::json;

/// Copies the template's `files/` tree into the project, rendering each file.
///
/// Files that already exist in the project are left untouched.
pub fn run(ctx: &StepContext<'_>) -> Result<()> {
    let files_root = files_path(ctx.template_name);
    let context = json!({ "App": ctx.app, "Home": ctx.home });
    let processor =
        TemplateProcessor::new(ctx.renderer, ctx.store, &files_root, ctx.project_root, &context);

    let entries = ctx.store.walk(&files_root).map_err(|e| Error::filesystem(&files_root, e))?;
    for entry in &entries {
        let Some(operation) = processor.process(entry)? else {
            continue;
        };
        handle_operation(&operation)?;
        log::info!("{}", operation.get_message());
    }
    Ok(())
}

fn handle_operation(operation: &TemplateOperation) -> Result<()> {
    log::debug!("Handling template operation for {}", operation.target_path().display());
    match operation {
        TemplateOperation::CreateDirectory { target, target_exists } => {
            if !target_exists {
                create_dir_all(target)?;
            }
            Ok(())
        }
        TemplateOperation::Write { target, content, .. } => write_file(content, target),
        TemplateOperation::Skip { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VersionResolver;
    use crate::renderer::MiniJinjaRenderer;
    use crate::store::LocalTemplateStore;
    use std::fs;
    use tempfile::TempDir;

    struct NoRegistry;

    impl VersionResolver for NoRegistry {
        fn latest_version(&self, package: &str) -> Result<String> {
            panic!("unexpected lookup of {package}")
        }
    }

    fn assets() -> TempDir {
        let assets = TempDir::new().unwrap();
        let files = assets.path().join("templates/js/files");
        fs::create_dir_all(files.join("src/empty")).unwrap();
        fs::write(
            files.join("sst.config.ts"),
            "export default { app: \"{{ App }}\", home: \"{{ Home }}\" };\n",
        )
        .unwrap();
        fs::write(files.join("src/index.ts"), "console.log(\"{{ App | pascal_case }}\");\n")
            .unwrap();
        assets
    }

    fn run_copy(assets: &TempDir, project: &TempDir) -> Result<()> {
        let store = LocalTemplateStore::new(assets.path());
        let renderer = MiniJinjaRenderer::new();
        let ctx = StepContext {
            project_root: project.path(),
            template_name: "js",
            app: "my-app",
            home: "cloudflare",
            store: &store,
            resolver: &NoRegistry,
            renderer: &renderer,
        };
        run(&ctx)
    }

    #[test]
    fn copies_and_renders_tree() {
        let assets = assets();
        let project = TempDir::new().unwrap();
        run_copy(&assets, &project).unwrap();

        assert_eq!(
            fs::read_to_string(project.path().join("sst.config.ts")).unwrap(),
            "export default { app: \"my-app\", home: \"cloudflare\" };\n"
        );
        assert_eq!(
            fs::read_to_string(project.path().join("src/index.ts")).unwrap(),
            "console.log(\"MyApp\");\n"
        );
        assert!(project.path().join("src/empty").is_dir());
    }

    #[test]
    fn never_clobbers_existing_files() {
        let assets = assets();
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("src")).unwrap();
        fs::write(project.path().join("src/index.ts"), "// mine\n").unwrap();

        run_copy(&assets, &project).unwrap();
        assert_eq!(fs::read_to_string(project.path().join("src/index.ts")).unwrap(), "// mine\n");
        assert!(project.path().join("sst.config.ts").exists());
    }

    #[test]
    fn missing_files_tree_is_filesystem_failure() {
        let assets = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let err = run_copy(&assets, &project).unwrap_err();
        assert!(matches!(err, Error::FilesystemFailure { .. }));
    }

    #[test]
    fn render_failure_aborts() {
        let assets = assets();
        fs::write(assets.path().join("templates/js/files/broken.txt"), "{{ App ").unwrap();
        let project = TempDir::new().unwrap();
        let err = run_copy(&assets, &project).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
        assert!(!project.path().join("broken.txt").exists());
    }
}
