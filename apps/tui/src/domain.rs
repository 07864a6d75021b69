/// Column names of the fan table.
pub mod fan_columns {
    pub const ID: &str = "Fan_ID";
    pub const SCORE: &str = "Fan_Score";
    pub const TIER: &str = "Nivel_Fan";
    pub const CLUSTER: &str = "Cluster";
    pub const WEB_VISITS: &str = "Frecuencia_Visitas_Web";
    pub const SOCIAL_INTERACTIONS: &str = "Interacciones_RRSS";
    pub const ECOMMERCE_PURCHASES: &str = "Compras_Ecommerce";
    pub const TOTAL_SPEND: &str = "Gasto_Total_€";
    pub const STADIUM_ATTENDANCE: &str = "Asistencias_Estadio";
    pub const SURVEY_PARTICIPATION: &str = "Participacion_Encuestas";
    pub const OFFICIAL_APP_USAGE: &str = "Seguimiento_App_Oficial";
    pub const NEWSLETTER_CLICK_RATE: &str = "Newsletter_ClickRate";

    /// Counters shown for a single fan in the detail view.
    pub const BEHAVIOUR: [&str; 5] = [
        WEB_VISITS,
        SOCIAL_INTERACTIONS,
        ECOMMERCE_PURCHASES,
        TOTAL_SPEND,
        STADIUM_ATTENDANCE,
    ];

    /// Digital engagement columns averaged per cluster in the advanced view.
    pub const DIGITAL: [&str; 6] = [
        WEB_VISITS,
        SOCIAL_INTERACTIONS,
        ECOMMERCE_PURCHASES,
        SURVEY_PARTICIPATION,
        OFFICIAL_APP_USAGE,
        NEWSLETTER_CLICK_RATE,
    ];
}

/// Column names of the cluster summary table.
pub mod cluster_columns {
    pub const CLUSTER: &str = "Cluster";
    pub const SCORE: &str = "Fan_Score";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Premium,
    Alto,
    Medio,
    Bajo,
    Dormido,
}

impl Tier {
    /// Tiers that appear as percentage columns in the cluster summary.
    pub const SUMMARY_COLUMNS: [Self; 4] = [Self::Alto, Self::Medio, Self::Bajo, Self::Dormido];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Alto => "Alto",
            Self::Medio => "Medio",
            Self::Bajo => "Bajo",
            Self::Dormido => "Dormido",
        }
    }
}

/// The four dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Overview,
    Clusters,
    FanDetail,
    Advanced,
}

impl View {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Clusters, Self::FanDetail, Self::Advanced];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Clusters => "clusters",
            Self::FanDetail => "detail",
            Self::Advanced => "advanced",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Clusters => 1,
            Self::FanDetail => 2,
            Self::Advanced => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Clusters),
            2 => Some(Self::FanDetail),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "overview" | "resumen" => Some(Self::Overview),
            "clusters" | "segmentation" => Some(Self::Clusters),
            "detail" | "fan" => Some(Self::FanDetail),
            "advanced" | "avanzado" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Resumen General",
            Self::Clusters => "Segmentación por Clusters",
            Self::FanDetail => "Detalle Individual",
            Self::Advanced => "Análisis Avanzado",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview General de la Afición",
            Self::Clusters => "Análisis de Clusters",
            Self::FanDetail => "Perfil del Aficionado",
            Self::Advanced => "Análisis Avanzado de Fans",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_index_round_trips() {
        for view in View::ALL {
            assert_eq!(View::from_index(view.index()), Some(view));
        }
        assert_eq!(View::from_index(4), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(View::parse(" Advanced "), Some(View::Advanced));
        assert_eq!(View::parse("detail"), Some(View::FanDetail));
    }

    #[test]
    fn summary_columns_exclude_premium() {
        assert!(!Tier::SUMMARY_COLUMNS.contains(&Tier::Premium));
        assert_eq!(
            Tier::SUMMARY_COLUMNS.map(Tier::as_str),
            ["Alto", "Medio", "Bajo", "Dormido"]
        );
    }
}
