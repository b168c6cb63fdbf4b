/// How a locale joins a list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListPattern {
    /// Between the two items of a two-item list.
    pub pair: &'static str,
    /// Between leading items of a longer list.
    pub middle: &'static str,
    /// Before the last item of a longer list.
    pub last: &'static str,
}

impl ListPattern {
    pub(crate) fn join(&self, items: &[String]) -> String {
        match items {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{first}{}{second}", self.pair),
            [init @ .., last] => format!("{}{}{last}", init.join(self.middle), self.last),
        }
    }
}

pub(crate) const EN: ListPattern = ListPattern { pair: " and ", middle: ", ", last: ", and " };
pub(crate) const FR: ListPattern = ListPattern { pair: " et ", middle: ", ", last: " et " };
pub(crate) const JA: ListPattern = ListPattern { pair: "、", middle: "、", last: "、" };
