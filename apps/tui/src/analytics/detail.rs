use crate::data::{DataError, DataTable};
use crate::domain::fan_columns;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;
use std::collections::HashSet;

/// Distinct fan ids in first-appearance order.
pub fn unique_fan_ids(fans: &DataTable) -> Result<Vec<&str>, DataError> {
    let mut seen = HashSet::new();
    Ok(fans
        .column(fan_columns::ID)?
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect())
}

/// Positions in `ids` that fuzzy-match `query`, best match first with ties
/// in list order. An empty query keeps every position in order.
pub fn rank_fan_ids<S: AsRef<str>>(ids: &[S], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..ids.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, usize)> = ids
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            matcher
                .fuzzy_match(id.as_ref(), query)
                .map(|score| (score, index))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, index)| index).collect()
}

/// Row index of the first fan whose id equals `id` exactly.
pub fn find_fan_row(fans: &DataTable, id: &str) -> Result<usize, DataError> {
    fans.column(fan_columns::ID)?
        .into_iter()
        .position(|candidate| candidate == id)
        .ok_or_else(|| DataError::UnknownFan(id.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FanProfile {
    pub id: String,
    pub score: f64,
    pub tier: String,
    /// `(column, value)` for each behaviour counter.
    pub behaviour: Vec<(&'static str, f64)>,
}

impl FanProfile {
    pub fn score_label(&self) -> String {
        format!("{:.1}", self.score)
    }
}

pub fn fan_profile(fans: &DataTable, id: &str) -> Result<FanProfile, DataError> {
    let row = find_fan_row(fans, id)?;

    let behaviour = fan_columns::BEHAVIOUR
        .iter()
        .map(|column| fans.numeric_cell(row, column).map(|value| (*column, value)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FanProfile {
        id: fans.text_cell(row, fan_columns::ID)?.to_string(),
        score: fans.numeric_cell(row, fan_columns::SCORE)?,
        tier: fans.text_cell(row, fan_columns::TIER)?.to_string(),
        behaviour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Fan_ID,Fan_Score,Nivel_Fan,Frecuencia_Visitas_Web,Interacciones_RRSS,Compras_Ecommerce,Gasto_Total_€,Asistencias_Estadio";

    fn fans() -> DataTable {
        let csv = format!(
            "{HEADER}\nF001,72.34,Premium,12,30,4,250.5,6\nF002,15,Dormido,1,0,0,0,0\nF010,55,Medio,5,8,1,40,2\nF001,10,Bajo,0,0,0,0,0\n"
        );
        DataTable::from_reader("fan_data.csv", csv.as_bytes()).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn ids_are_unique_in_first_appearance_order() -> Result<(), DataError> {
        let table = fans();
        assert_eq!(unique_fan_ids(&table)?, vec!["F001", "F002", "F010"]);
        Ok(())
    }

    #[test]
    fn every_present_id_resolves_to_itself() -> Result<(), DataError> {
        let table = fans();
        for id in unique_fan_ids(&table)? {
            assert_eq!(fan_profile(&table, id)?.id, id);
        }
        Ok(())
    }

    #[test]
    fn duplicate_ids_resolve_to_first_row() -> Result<(), DataError> {
        let profile = fan_profile(&fans(), "F001")?;

        assert_eq!(profile.tier, "Premium");
        assert_eq!(profile.score_label(), "72.3");
        assert_eq!(
            profile.behaviour,
            vec![
                ("Frecuencia_Visitas_Web", 12.0),
                ("Interacciones_RRSS", 30.0),
                ("Compras_Ecommerce", 4.0),
                ("Gasto_Total_€", 250.5),
                ("Asistencias_Estadio", 6.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!(matches!(
            fan_profile(&fans(), "F999"),
            Err(DataError::UnknownFan(ref id)) if id == "F999"
        ));
    }

    #[test]
    fn missing_counter_column_is_an_error() -> Result<(), csv::Error> {
        let table = DataTable::from_reader("fan_data.csv", "Fan_ID,Fan_Score,Nivel_Fan\nF1,1,Bajo\n".as_bytes())?;
        assert!(matches!(
            fan_profile(&table, "F1"),
            Err(DataError::MissingColumn { ref column, .. }) if column == "Frecuencia_Visitas_Web"
        ));
        Ok(())
    }

    #[test]
    fn empty_query_keeps_all_ids() {
        let ids = ["F001", "F002", "F010"];
        assert_eq!(rank_fan_ids(&ids, "  "), vec![0, 1, 2]);
    }

    #[test]
    fn query_filters_ids() {
        let ids = ["F001", "F002", "F010"];
        let matches = rank_fan_ids(&ids, "10");

        assert_eq!(matches.first(), Some(&2));
        assert!(!matches.contains(&1));
    }

    #[test]
    fn owned_ids_rank_like_borrowed_ones() {
        let ids: Vec<String> = vec!["A7".into(), "B7".into(), "C1".into()];
        assert_eq!(rank_fan_ids(&ids, "7"), vec![0, 1]);
    }
}
