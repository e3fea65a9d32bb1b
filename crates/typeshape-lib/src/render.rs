//! Schema text output.
//!
//! Layout: the header line, then every interface, then every alias, each
//! preceded by a blank line and in registry order.

use std::io::{self, Write};

use crate::config::Config;
use crate::registry::Registry;
use crate::ts::{Alias, Interface};

pub(crate) struct Renderer<'a> {
    registry: &'a Registry,
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(registry: &'a Registry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Write the whole schema. Stops at the first write error.
    pub(crate) fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}", self.config.header)?;
        for interface in self.registry.interfaces() {
            writeln!(w)?;
            self.interface(w, interface)?;
        }
        for alias in self.registry.aliases() {
            writeln!(w)?;
            self.alias(w, alias)?;
        }
        Ok(())
    }

    fn export(&self) -> &'static str {
        if self.config.export { "export " } else { "" }
    }

    fn interface(&self, w: &mut dyn Write, interface: &Interface) -> io::Result<()> {
        let indent = &self.config.indent;
        let (outer, keyword) = match &interface.namespace {
            Some(ns) => {
                writeln!(w, "{}namespace {ns} {{", self.export())?;
                (indent.as_str(), "export ")
            }
            None => ("", self.export()),
        };

        writeln!(w, "{outer}{keyword}interface {} {{", interface.name)?;
        for property in &interface.properties {
            let optional = if property.optional { "?" } else { "" };
            writeln!(
                w,
                "{outer}{indent}{}{optional}: {};",
                property.name,
                property.ty.display(self.registry)
            )?;
        }
        writeln!(w, "{outer}}}")?;

        if interface.namespace.is_some() {
            writeln!(w, "}}")?;
        }
        Ok(())
    }

    fn alias(&self, w: &mut dyn Write, alias: &Alias) -> io::Result<()> {
        let ty = alias.ty.display(self.registry);
        match &alias.namespace {
            Some(ns) => writeln!(
                w,
                "{}namespace {ns} {{ export type {} = {ty}; }}",
                self.export(),
                alias.name
            ),
            None => writeln!(w, "{}type {} = {ty};", self.export(), alias.name),
        }
    }
}
