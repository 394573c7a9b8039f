#![allow(dead_code)]

use anyhow::Result;
use bundler_demo::apps::Context;
use bundler_demo::tools::bundler::Provisioner;
use bundler_demo::tools::Captured;
use bundler_demo::tools::ProcessRunner;
use bundler_demo::tools::Tools;
use bundler_demo::workflow::Settings;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Call {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub stdin: Vec<u8>,
}

impl Call {
    /// Name of the utility that was run.
    pub fn utility(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Value following `flag` on the command line.
    pub fn flag(&self, flag: &str) -> Option<&str> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(String::as_str)
    }
}

/// Records every spawned process and replays scripted stdout.
#[derive(Clone, Default)]
pub struct FakeRunner {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub replies: Rc<RefCell<VecDeque<Vec<u8>>>>,
    pub exit_code: i32,
}

impl FakeRunner {
    pub fn reply(&self, stdout: &str) {
        self.replies
            .borrow_mut()
            .push_back(stdout.as_bytes().to_vec());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, program: &Path, args: &[&str], stdin: &[u8]) {
        self.calls.borrow_mut().push(Call {
            program: program.to_owned(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.to_vec(),
        });
    }
}

impl ProcessRunner for FakeRunner {
    fn status(&mut self, program: &Path, args: &[&str]) -> Result<i32> {
        self.record(program, args, &[]);
        Ok(self.exit_code)
    }

    fn communicate(&mut self, program: &Path, args: &[&str], stdin: &[u8]) -> Result<Captured> {
        self.record(program, args, stdin);
        let stdout = self
            .replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted reply for {}", program.display()))?;
        Ok(Captured { code: 0, stdout })
    }
}

/// Hands out predictable paths without touching the network.
pub struct FakeProvisioner {
    pub root: PathBuf,
}

impl Provisioner for FakeProvisioner {
    fn ensure_ready(&mut self) -> Result<()> {
        Ok(())
    }

    fn utility(&mut self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join("utility").join(name))
    }

    fn icon(&mut self, glyph: &str, font: &str, colour: &str) -> Result<PathBuf> {
        Ok(self
            .root
            .join("icons")
            .join(font)
            .join(colour)
            .join(format!("{glyph}.png")))
    }
}

pub fn context(dir: &Path, runner: FakeRunner) -> Context {
    let mut provisioner = FakeProvisioner {
        root: dir.join("bundler"),
    };
    let tools = Tools::resolve(&mut provisioner).unwrap();
    Context {
        settings: Settings::load(dir.join("settings.json")).unwrap(),
        provisioner: Box::new(provisioner),
        runner: Box::new(runner),
        tools,
    }
}
