use serde::{Deserialize, Serialize};

/// 按插入顺序保存的章节映射
///
/// 同名章节再次插入时覆盖旧值但保留原位置，后写入者生效
#[derive(Debug, Clone, PartialEq)]
pub struct AreaMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for AreaMap<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> AreaMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入章节，返回被覆盖的旧值
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// 对每个值做变换，保持顺序
    pub fn map_values<U>(&self, mut f: impl FnMut(&str, &V) -> U) -> AreaMap<U> {
        AreaMap {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(key, value)))
                .collect(),
        }
    }
}

impl<V> FromIterator<(String, V)> for AreaMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = AreaMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<V> IntoIterator for AreaMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// 章节名 → 关键词列表（去重，按长度从长到短）
pub type KeywordMap = AreaMap<Vec<String>>;

/// 大纲章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusArea {
    pub name: String,
    pub raw_content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl SyllabusArea {
    pub fn new(name: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_content: raw_content.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// 已解析的大纲：章节及其关键词
#[derive(Debug, Clone, Default)]
pub struct Syllabus {
    pub areas: AreaMap<SyllabusArea>,
}

impl Syllabus {
    /// 章节名 → 关键词
    pub fn keyword_map(&self) -> KeywordMap {
        self.areas.map_values(|_, area| area.keywords.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
