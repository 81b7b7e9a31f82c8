use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn sales() -> IndicatorId {
        IndicatorId::new("sales")
    }
    pub fn operating_profit() -> IndicatorId {
        IndicatorId::new("operating_profit")
    }
    pub fn invoices() -> IndicatorId {
        IndicatorId::new("invoices")
    }
    pub fn avg_units_per_invoice() -> IndicatorId {
        IndicatorId::new("avg_units_per_invoice")
    }
}

/// Build the full catalogue of KPI cards.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::sales(),
            label: "Sales".into(),
            icon: "dollar-sign".into(),
            format: ValueFormat::Money {
                currency: "$".into(),
            },
            description: Some("Sales of the last recorded month".into()),
        },
        IndicatorMeta {
            id: ids::operating_profit(),
            label: "Operating profit".into(),
            icon: "trending-up".into(),
            format: ValueFormat::Money {
                currency: "$".into(),
            },
            description: Some("Sales minus cost of sales for the last recorded month".into()),
        },
        IndicatorMeta {
            id: ids::invoices(),
            label: "Invoices".into(),
            icon: "invoices".into(),
            format: ValueFormat::Integer,
            description: Some("Invoices generated in the last recorded month".into()),
        },
        IndicatorMeta {
            id: ids::avg_units_per_invoice(),
            label: "Units per invoice".into(),
            icon: "package".into(),
            format: ValueFormat::Number { decimals: 1 },
            description: Some("Units sold / invoices for the last recorded month".into()),
        },
    ];

    IndicatorCatalogResponse { indicators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = build_catalog();
        assert_eq!(catalog.indicators.len(), 4);
        let ids: HashSet<_> = catalog.indicators.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), catalog.indicators.len());
    }
}
