use crate::flatten::MatchKpiRecord;
use crate::kpi::KpiValues;
use std::collections::BTreeMap;

/// Per-player means over the retained matches. The `Winrate` slot holds the
/// mean of the per-match win indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub puuid: String,
    pub summoner_name: String,
    pub matches: usize,
    pub kpis: KpiValues,
}

#[derive(Debug)]
struct Accumulator<'a> {
    summoner_name: &'a str,
    sums: KpiValues,
    count: usize,
}

/// Groups match rows by PUUID and averages every KPI. Players come out sorted
/// by PUUID; the display name is the first one seen for that player.
pub fn aggregate_player_level(rows: &[MatchKpiRecord]) -> Vec<PlayerAggregate> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for row in rows {
        let acc = groups.entry(row.puuid.as_str()).or_insert_with(|| Accumulator {
            summoner_name: &row.summoner_name,
            sums: KpiValues::default(),
            count: 0,
        });
        if acc.summoner_name.is_empty() {
            acc.summoner_name = &row.summoner_name;
        }
        for (kpi, value) in row.kpis.iter() {
            acc.sums[kpi] += value;
        }
        acc.count += 1;
    }

    groups
        .into_iter()
        .map(|(puuid, acc)| {
            let count = acc.count as f64;
            PlayerAggregate {
                puuid: puuid.to_string(),
                summoner_name: acc.summoner_name.to_string(),
                matches: acc.count,
                kpis: acc.sums.iter().map(|(kpi, sum)| (kpi, sum / count)).collect(),
            }
        })
        .collect()
}
