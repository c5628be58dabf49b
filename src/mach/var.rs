use super::Val;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// One table per run. Names are bound on first assignment and
/// overwritten by later ones.
#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// The variable's value, or the name itself as text when unbound.
    pub fn fetch_or_text(&self, text: &str) -> Val {
        match self.vars.get(text) {
            Some(val) => val.clone(),
            None => Val::String(text.into()),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites_any_type() {
        let mut var = Var::new();
        let name: Rc<str> = "x".into();
        var.store(&name, Val::Number(1.0));
        var.store(&name, Val::String("one".into()));
        assert_eq!(var.fetch("x"), Some(&Val::String("one".into())));
        assert_eq!(var.fetch_or_text("y"), Val::String("y".into()));
        var.clear();
        assert!(var.is_empty());
    }
}
