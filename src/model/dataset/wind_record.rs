use crate::common::*;

/* CSV 원본 행: strength 는 "0-1", "6+" 같은 구간 문자열 */
#[derive(Debug, Clone, PartialEq, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct WindRawRecord {
    pub direction: String,
    pub strength: String,
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct WindRecord {
    pub direction: String,
    pub strength: f64,
    pub frequency: f64,
}
