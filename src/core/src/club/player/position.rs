use serde::Serialize;

/// The fixed set of tactical positions a player can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    LeftBack,
    CenterBack,
    RightBack,
    DefensiveMidfielder,
    LeftMidfielder,
    CenterMidfielder,
    RightMidfielder,
    AttackingMidfielder,
    LeftWinger,
    RightWinger,
    Striker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::LeftBack
            | PlayerPositionType::CenterBack
            | PlayerPositionType::RightBack => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::LeftMidfielder
            | PlayerPositionType::CenterMidfielder
            | PlayerPositionType::RightMidfielder
            | PlayerPositionType::AttackingMidfielder => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::LeftWinger
            | PlayerPositionType::RightWinger
            | PlayerPositionType::Striker => PlayerFieldPositionGroup::Forward,
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Goalkeeper
    }

    #[inline]
    pub fn is_defender(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Defender
    }

    #[inline]
    pub fn is_midfielder(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Midfielder
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Forward
    }

    /// Positions that count as goal threats when a scorer is selected.
    pub fn is_attacking(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::Striker
                | PlayerPositionType::LeftWinger
                | PlayerPositionType::RightWinger
                | PlayerPositionType::AttackingMidfielder
        )
    }

    /// Positions eligible to provide an assist.
    pub fn is_playmaking(&self) -> bool {
        matches!(
            self,
            PlayerPositionType::DefensiveMidfielder
                | PlayerPositionType::LeftMidfielder
                | PlayerPositionType::CenterMidfielder
                | PlayerPositionType::RightMidfielder
                | PlayerPositionType::AttackingMidfielder
        )
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::LeftBack => "LB",
            PlayerPositionType::CenterBack => "CB",
            PlayerPositionType::RightBack => "RB",
            PlayerPositionType::DefensiveMidfielder => "CDM",
            PlayerPositionType::LeftMidfielder => "LM",
            PlayerPositionType::CenterMidfielder => "CM",
            PlayerPositionType::RightMidfielder => "RM",
            PlayerPositionType::AttackingMidfielder => "CAM",
            PlayerPositionType::LeftWinger => "LW",
            PlayerPositionType::RightWinger => "RW",
            PlayerPositionType::Striker => "ST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_groups_are_consistent() {
        assert!(PlayerPositionType::Goalkeeper.is_goalkeeper());
        assert!(PlayerPositionType::CenterBack.is_defender());
        assert!(PlayerPositionType::CenterMidfielder.is_midfielder());
        assert!(PlayerPositionType::Striker.is_forward());
    }

    #[test]
    fn attacking_and_playmaking_sets() {
        assert!(PlayerPositionType::Striker.is_attacking());
        assert!(PlayerPositionType::AttackingMidfielder.is_attacking());
        assert!(!PlayerPositionType::CenterBack.is_attacking());

        assert!(PlayerPositionType::CenterMidfielder.is_playmaking());
        assert!(PlayerPositionType::AttackingMidfielder.is_playmaking());
        assert!(!PlayerPositionType::Striker.is_playmaking());
    }
}
