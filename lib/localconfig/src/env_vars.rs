use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Environment variables in declaration order with unique names.
///
/// Setting a name that is already present replaces its value in place so the original position
/// is kept; new names are appended.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(from = "Vec<EnvVar>", into = "Vec<EnvVar>")]
pub struct EnvVarList(Vec<EnvVar>);

impl EnvVarList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(EnvVar { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvVar> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<EnvVar>> for EnvVarList {
    fn from(vars: Vec<EnvVar>) -> Self {
        vars.into_iter().map(|e| (e.name, e.value)).collect()
    }
}

impl From<EnvVarList> for Vec<EnvVar> {
    fn from(list: EnvVarList) -> Self {
        list.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVarList {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut list = EnvVarList::new();
        for (name, value) in iter {
            list.set(name, value);
        }
        list
    }
}

impl<'a> IntoIterator for &'a EnvVarList {
    type Item = &'a EnvVar;
    type IntoIter = std::slice::Iter<'a, EnvVar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{EnvVar, EnvVarList};

    #[test]
    fn should_keep_declaration_order() {
        let list: EnvVarList = [("ZED", "1"), ("ALPHA", "2"), ("MIDDLE", "3")]
            .into_iter()
            .collect();

        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(vec!["ZED", "ALPHA", "MIDDLE"], names);
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let list = EnvVarList::from(vec![
            EnvVar::new("FOO", "1"),
            EnvVar::new("BAR", "2"),
            EnvVar::new("FOO", "3"),
        ]);

        assert_eq!(2, list.len());
        assert_eq!(Some("3"), list.get("FOO"));
        assert_eq!("FOO", list.iter().next().unwrap().name);
    }

    #[test]
    fn should_deserialize_from_list_of_name_value_pairs() {
        let list: EnvVarList =
            serde_yaml::from_str("- Name: FOO\n  Value: bar\n- Name: BAZ\n  Value: qux\n")
                .unwrap();

        assert_eq!(Some("bar"), list.get("FOO"));
        assert_eq!(Some("qux"), list.get("BAZ"));
        assert!(!list.is_empty());
    }
}
