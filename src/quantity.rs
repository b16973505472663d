/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Pressure,
    Length,
    Area,
    Mass,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Temperature,
        QuantityKind::TemperatureDifference,
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Mass,
    ];

    /// 메뉴 번호(1부터)로 물리량을 찾는다.
    pub fn from_menu_index(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
