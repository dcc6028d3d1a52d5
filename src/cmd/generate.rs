use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::extract::SourceFile;
use crate::generate::Generator;

pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub suite: Option<String>,
    pub no_line_directives: bool,
}

/// Would writing `output` overwrite `input`? `output` may not exist yet.
fn same_file(input: &Path, output: &Path) -> bool {
    let Ok(input_abs) = std::fs::canonicalize(input) else {
        return input == output;
    };
    if let Ok(output_abs) = std::fs::canonicalize(output) {
        return input_abs == output_abs;
    }
    // A bare file name has an empty parent
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (std::fs::canonicalize(parent), output.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name) == input_abs,
        _ => input == output,
    }
}

pub fn cmd_generate(config: &Config, opts: GenerateOptions) -> Result<()> {
    if let Some(ref output) = opts.output {
        if same_file(&opts.input, output) {
            bail!(
                "input and output are the same file: {}",
                opts.input.display()
            );
        }
    }

    let mut gen_config = config.generate.clone();
    if opts.suite.is_some() {
        gen_config.default_suite = opts.suite;
    }
    if opts.no_line_directives {
        gen_config.line_directives = false;
    }

    let source = SourceFile::read(&opts.input)?;
    let label = opts.input.display().to_string();
    let rendered = Generator::new(&gen_config)
        .render(&label, &source)
        .map_err(|e| anyhow::anyhow!("{}:{}: {}", label, source.locate(&e), e))?;

    match opts.output {
        Some(output) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create directory: {}", parent.display()))?;
            }
            std::fs::write(&output, rendered)
                .with_context(|| format!("cannot write file: {}", output.display()))?;
            log::info!("wrote {}", output.display());
        }
        None => {
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .context("cannot write to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_same_file_spellings() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("calc.h");
        std::fs::write(&input, "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(same_file(&input, &dir.path().join("./calc.h")));
        assert!(same_file(&dir.path().join("sub/../calc.h"), &input));
        assert!(!same_file(&input, &dir.path().join("calc_test.cpp")));
        assert!(!same_file(&input, &dir.path().join("missing/calc.h")));
    }
}
