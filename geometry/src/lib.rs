#![allow(dead_code)]

//! 4인 상치(象棋) 보드 기하 연산.
//!
//! 좌표 검사, 영역 판정, 직선 경로 열거, 기물별 이동 오프셋 같은
//! 순수 함수만 모아둔 크레이트. 상태를 전혀 갖지 않으며,
//! 보드 구성은 전부 `BoardConfig`로 명시적으로 전달받는다.

/// 플레이어 식별자 (0=홍, 1=청, 2=녹, 3=흑)
pub type PlayerId = u8;

/// 플레이어 수
pub const NUM_PLAYERS: usize = 4;

/// 기물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Pawn,
}

impl PieceKind {
    /// 기보 표기에 쓰는 한자 이름 (진영마다 글자가 다르다)
    pub fn label(&self, owner: PlayerId) -> &'static str {
        match (self, owner) {
            (PieceKind::King, 0) => "帅",
            (PieceKind::King, _) => "将",
            (PieceKind::Advisor, 0) => "士",
            (PieceKind::Advisor, _) => "仕",
            (PieceKind::Elephant, 0) => "相",
            (PieceKind::Elephant, _) => "象",
            (PieceKind::Horse, _) => "马",
            (PieceKind::Rook, _) => "车",
            (PieceKind::Cannon, _) => "炮",
            (PieceKind::Pawn, 0 | 1) => "兵",
            (PieceKind::Pawn, _) => "卒",
        }
    }
}

/// 두 팀. 대각선 짝이라 One = {0, 1}, Two = {2, 3}이 기본이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// 상대 팀
    pub fn opponent(&self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// 8방향. 위쪽이 y 감소 방향이다 (화면 좌표계).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// 한 칸 이동했을 때의 (dx, dy)
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// (x, y)에서 이 방향으로 steps칸 이동한 좌표
    pub fn step(&self, x: i32, y: i32, steps: i32) -> (i32, i32) {
        let (dx, dy) = self.offset();
        (x + dx * steps, y + dy * steps)
    }

    /// 두 좌표 사이의 방향. 8방향 어디에도 안 맞으면 None.
    pub fn between(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Option<Direction> {
        let dx = (to_x - from_x).signum();
        let dy = (to_y - from_y).signum();
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (-1, -1) => Some(Direction::UpLeft),
            (1, -1) => Some(Direction::UpRight),
            (-1, 1) => Some(Direction::DownLeft),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }
}

/// 닫힌 구간 사각 영역 [x0..=x1] × [y0..=y1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, x1: i32, y0: i32, y1: i32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// 강을 건넌 병/졸의 행마 규칙.
/// 변종마다 해석이 달라서 설정값으로 빼두었다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnRiverRule {
    /// 전진 방향 유지 + 좌우 (기본)
    ForwardAndSide,
    /// 좌우만, 전진은 버린다
    SideOnly,
}

/// 보드 구성. 엔진이 소비하는 정적 설정 데이터 전부가 여기 모인다.
/// 전역 상태로 조회하지 않고 항상 값으로 전달한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub board_size: i32,
    /// 강 십자선의 행/열 인덱스 (x == river_line || y == river_line)
    pub river_line: i32,
    pub playable_areas: [Rect; NUM_PLAYERS],
    pub palace_areas: [Rect; NUM_PLAYERS],
    /// 고정 팀 편성 (대각선 짝)
    pub teams: [[PlayerId; 2]; 2],
    /// 시계 방향 좌석 순번. 내부 번호와 좌석 순서가 달라서 표로 둔다.
    pub turn_order: [PlayerId; NUM_PLAYERS],
    pub pawn_river_rule: PawnRiverRule,
}

impl Default for BoardConfig {
    /// 표준 11×11 구성: 5×5 진영 네 개 + 강 십자선(행/열 5)
    fn default() -> Self {
        Self {
            board_size: 11,
            river_line: 5,
            playable_areas: [
                Rect::new(0, 4, 6, 10),  // 홍: 좌하
                Rect::new(6, 10, 0, 4),  // 청: 우상
                Rect::new(6, 10, 6, 10), // 녹: 우하
                Rect::new(0, 4, 0, 4),   // 흑: 좌상
            ],
            palace_areas: [
                Rect::new(0, 2, 8, 10),
                Rect::new(8, 10, 0, 2),
                Rect::new(8, 10, 8, 10),
                Rect::new(0, 2, 0, 2),
            ],
            teams: [[0, 1], [2, 3]],
            turn_order: [0, 2, 1, 3],
            pawn_river_rule: PawnRiverRule::ForwardAndSide,
        }
    }
}

/// 플레이어별 초기 배치. 네 진영이 회전 대칭이다.
/// 기물 구성: 궁 1, 사 1, 상 1, 차 1, 마 1, 포 1, 병 4.
pub const INITIAL_LAYOUT: [[(PieceKind, i32, i32); 10]; NUM_PLAYERS] = [
    // 홍 (좌하)
    [
        (PieceKind::King, 0, 10),
        (PieceKind::Advisor, 1, 9),
        (PieceKind::Elephant, 2, 10),
        (PieceKind::Rook, 0, 9),
        (PieceKind::Horse, 2, 8),
        (PieceKind::Cannon, 2, 9),
        (PieceKind::Pawn, 3, 10),
        (PieceKind::Pawn, 3, 8),
        (PieceKind::Pawn, 0, 7),
        (PieceKind::Pawn, 2, 7),
    ],
    // 청 (우상)
    [
        (PieceKind::King, 10, 0),
        (PieceKind::Advisor, 9, 1),
        (PieceKind::Elephant, 8, 0),
        (PieceKind::Rook, 10, 1),
        (PieceKind::Horse, 8, 2),
        (PieceKind::Cannon, 8, 1),
        (PieceKind::Pawn, 7, 0),
        (PieceKind::Pawn, 7, 2),
        (PieceKind::Pawn, 10, 3),
        (PieceKind::Pawn, 8, 3),
    ],
    // 녹 (우하)
    [
        (PieceKind::King, 10, 10),
        (PieceKind::Advisor, 9, 9),
        (PieceKind::Elephant, 10, 8),
        (PieceKind::Rook, 9, 10),
        (PieceKind::Horse, 8, 8),
        (PieceKind::Cannon, 9, 8),
        (PieceKind::Pawn, 10, 7),
        (PieceKind::Pawn, 8, 7),
        (PieceKind::Pawn, 7, 10),
        (PieceKind::Pawn, 7, 8),
    ],
    // 흑 (좌상)
    [
        (PieceKind::King, 0, 0),
        (PieceKind::Advisor, 1, 1),
        (PieceKind::Elephant, 0, 2),
        (PieceKind::Rook, 1, 0),
        (PieceKind::Horse, 2, 2),
        (PieceKind::Cannon, 1, 2),
        (PieceKind::Pawn, 0, 3),
        (PieceKind::Pawn, 2, 3),
        (PieceKind::Pawn, 3, 0),
        (PieceKind::Pawn, 3, 2),
    ],
];

impl BoardConfig {
    /// 좌표가 보드 안인지
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.board_size && y >= 0 && y < self.board_size
    }

    /// 강 십자선 위인지
    pub fn is_river_position(&self, x: i32, y: i32) -> bool {
        x == self.river_line || y == self.river_line
    }

    /// 플레이어 진영 안인지
    pub fn is_in_player_area(&self, x: i32, y: i32, player: PlayerId) -> bool {
        debug_assert!((player as usize) < NUM_PLAYERS);
        self.playable_areas[player as usize].contains(x, y)
    }

    /// 플레이어 궁성(3×3) 안인지
    pub fn is_in_palace(&self, x: i32, y: i32, player: PlayerId) -> bool {
        debug_assert!((player as usize) < NUM_PLAYERS);
        self.palace_areas[player as usize].contains(x, y)
    }

    /// 플레이어가 속한 팀
    pub fn team_of(&self, player: PlayerId) -> Team {
        if self.teams[0].contains(&player) {
            Team::One
        } else {
            Team::Two
        }
    }

    /// 같은 팀인지 (자기 자신도 포함)
    pub fn is_teammate(&self, a: PlayerId, b: PlayerId) -> bool {
        self.team_of(a) == self.team_of(b)
    }

    /// 서로 공격 가능한 사이인지
    pub fn is_enemy(&self, a: PlayerId, b: PlayerId) -> bool {
        a != b && !self.is_teammate(a, b)
    }

    /// 순번표에서 다음 플레이어
    pub fn next_in_rotation(&self, player: PlayerId) -> PlayerId {
        let idx = self
            .turn_order
            .iter()
            .position(|&p| p == player)
            .unwrap_or(0);
        self.turn_order[(idx + 1) % self.turn_order.len()]
    }

    /// 플레이어의 초기 배치
    pub fn initial_layout(&self, player: PlayerId) -> &'static [(PieceKind, i32, i32)] {
        debug_assert!((player as usize) < NUM_PLAYERS);
        &INITIAL_LAYOUT[player as usize]
    }
}

/// 맨해튼 거리
pub fn manhattan_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// 같은 행 또는 같은 열인지
pub fn is_on_same_line(x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
    x1 == x2 || y1 == y2
}

/// 두 좌표 사이의 중간 칸들 (양 끝 제외, 출발점에 가까운 순).
/// 같은 행/열에서만 호출해야 한다 — 호출자 계약이며 디버그 빌드에서 검사한다.
pub fn path_between(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Vec<(i32, i32)> {
    debug_assert!(
        is_on_same_line(from_x, from_y, to_x, to_y),
        "path_between은 같은 행 또는 같은 열에서만 호출해야 한다"
    );
    let dx = (to_x - from_x).signum();
    let dy = (to_y - from_y).signum();
    let steps = (to_x - from_x).abs().max((to_y - from_y).abs());
    let mut path = Vec::new();
    for i in 1..steps {
        path.push((from_x + dx * i, from_y + dy * i));
    }
    path
}

/// 마 이동 오프셋 (날 일자 8방향)
pub const HORSE_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 상 이동 오프셋 (밭 전자 4방향)
pub const ELEPHANT_OFFSETS: [(i32, i32); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

/// 보드 안에 들어오는 마 목적지들
pub fn horse_targets(config: &BoardConfig, x: i32, y: i32) -> Vec<(i32, i32)> {
    HORSE_OFFSETS
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| config.is_valid_position(nx, ny))
        .collect()
}

/// 자기 진영 안에 들어오는 상 목적지들. 상은 강을 건너지 못한다.
pub fn elephant_targets(config: &BoardConfig, x: i32, y: i32, player: PlayerId) -> Vec<(i32, i32)> {
    ELEPHANT_OFFSETS
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| {
            config.is_valid_position(nx, ny) && config.is_in_player_area(nx, ny, player)
        })
        .collect()
}

/// 마 다리: L자 이동의 긴 축 쪽으로 한 칸 옆 칸
pub fn horse_leg(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> (i32, i32) {
    let dx = to_x - from_x;
    let dy = to_y - from_y;
    if dx.abs() == 2 {
        (from_x + dx.signum(), from_y)
    } else {
        (from_x, from_y + dy.signum())
    }
}

/// 상 눈: 대각 이동의 가운데 칸
pub fn elephant_eye(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> (i32, i32) {
    (from_x + (to_x - from_x).signum(), from_y + (to_y - from_y).signum())
}

/// 4축 직선 위의 모든 칸 (차/포 후보). 강 칸은 지나갈 수만 있으므로 건너뛴다.
/// 가로막힘 판정은 여기서 하지 않는다 — 포는 가림돌 너머를 노리기 때문에
/// 축 전체를 내놓고 검증 단계에서 거른다.
pub fn line_targets(config: &BoardConfig, x: i32, y: i32) -> Vec<(i32, i32)> {
    let mut targets = Vec::new();
    for dir in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        for step in 1..config.board_size {
            let (nx, ny) = dir.step(x, y, step);
            if !config.is_valid_position(nx, ny) {
                break;
            }
            if config.is_river_position(nx, ny) {
                continue;
            }
            targets.push((nx, ny));
        }
    }
    targets
}

/// 병/졸의 전진 방향.
/// 인접한 적 진영 두 곳 중 가까운 쪽을 향한다 —
/// 진영 중앙선을 기준으로 어느 절반에 서 있는지로 판정한다.
pub fn pawn_forward(config: &BoardConfig, x: i32, y: i32, player: PlayerId) -> Direction {
    let area = &config.playable_areas[player as usize];
    match player {
        0 => {
            if 2 * y < area.y0 + area.y1 {
                Direction::Up
            } else {
                Direction::Right
            }
        }
        1 => {
            if 2 * x < area.x0 + area.x1 {
                Direction::Left
            } else {
                Direction::Down
            }
        }
        2 => {
            if 2 * y < area.y0 + area.y1 {
                Direction::Up
            } else {
                Direction::Left
            }
        }
        _ => {
            if 2 * x < area.x0 + area.x1 {
                Direction::Down
            } else {
                Direction::Right
            }
        }
    }
}

/// 자기 진영을 벗어났으면 강을 건넌 것으로 본다 (강 칸 위도 포함)
pub fn pawn_crossed_river(config: &BoardConfig, x: i32, y: i32, player: PlayerId) -> bool {
    !config.is_in_player_area(x, y, player)
}

/// 병/졸이 현재 위치에서 움직일 수 있는 방향들
pub fn pawn_directions(config: &BoardConfig, x: i32, y: i32, player: PlayerId) -> Vec<Direction> {
    let forward = pawn_forward(config, x, y, player);
    if !pawn_crossed_river(config, x, y, player) {
        return vec![forward];
    }

    let mut directions = Vec::new();
    if config.pawn_river_rule == PawnRiverRule::ForwardAndSide {
        directions.push(forward);
    }
    // 전진 축에 수직인 두 방향이 추가된다
    match forward {
        Direction::Left | Direction::Right => {
            directions.push(Direction::Up);
            directions.push(Direction::Down);
        }
        _ => {
            directions.push(Direction::Left);
            directions.push(Direction::Right);
        }
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let config = BoardConfig::default();
        assert!(config.is_valid_position(0, 0));
        assert!(config.is_valid_position(10, 10));
        assert!(!config.is_valid_position(-1, 0));
        assert!(!config.is_valid_position(0, 11));
    }

    #[test]
    fn test_regions() {
        let config = BoardConfig::default();
        // 홍 진영과 궁성
        assert!(config.is_in_player_area(0, 10, 0));
        assert!(config.is_in_palace(0, 10, 0));
        assert!(config.is_in_palace(2, 8, 0));
        assert!(!config.is_in_palace(3, 8, 0));
        // 강 십자선은 어느 진영에도 속하지 않는다
        assert!(config.is_river_position(5, 0));
        assert!(config.is_river_position(8, 5));
        for player in 0..NUM_PLAYERS as PlayerId {
            assert!(!config.is_in_player_area(5, 5, player));
        }
    }

    #[test]
    fn test_teams() {
        let config = BoardConfig::default();
        assert_eq!(config.team_of(0), Team::One);
        assert_eq!(config.team_of(1), Team::One);
        assert_eq!(config.team_of(2), Team::Two);
        assert_eq!(config.team_of(3), Team::Two);
        assert!(config.is_teammate(0, 1));
        assert!(config.is_teammate(2, 2));
        assert!(!config.is_enemy(0, 0));
        assert!(config.is_enemy(0, 2));
        assert!(config.is_enemy(1, 3));
        assert_eq!(Team::One.opponent(), Team::Two);
    }

    #[test]
    fn test_rotation_order() {
        // 시계 방향: 0 → 2 → 1 → 3 → 0
        let config = BoardConfig::default();
        assert_eq!(config.next_in_rotation(0), 2);
        assert_eq!(config.next_in_rotation(2), 1);
        assert_eq!(config.next_in_rotation(1), 3);
        assert_eq!(config.next_in_rotation(3), 0);
    }

    #[test]
    fn test_manhattan_and_line() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert!(is_on_same_line(2, 0, 2, 9));
        assert!(is_on_same_line(0, 7, 9, 7));
        assert!(!is_on_same_line(0, 0, 1, 1));
    }

    #[test]
    fn test_path_between() {
        // 중간 칸만, 출발점에 가까운 순
        assert_eq!(path_between(0, 6, 4, 6), vec![(1, 6), (2, 6), (3, 6)]);
        assert_eq!(path_between(4, 6, 0, 6), vec![(3, 6), (2, 6), (1, 6)]);
        // 인접 칸 사이에는 중간 칸이 없다
        assert!(path_between(3, 3, 3, 4).is_empty());
    }

    #[test]
    fn test_horse_targets_open() {
        let config = BoardConfig::default();
        // (2,2)에서는 8방향 전부 보드 안
        let targets = horse_targets(&config, 2, 2);
        assert_eq!(targets.len(), 8);
        for &(dx, dy) in HORSE_OFFSETS.iter() {
            assert!(targets.contains(&(2 + dx, 2 + dy)));
        }
    }

    #[test]
    fn test_horse_targets_corner() {
        let config = BoardConfig::default();
        // 구석에서는 보드 안쪽 두 방향만 남는다
        let targets = horse_targets(&config, 0, 0);
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&(1, 2)));
        assert!(targets.contains(&(2, 1)));
    }

    #[test]
    fn test_elephant_confined() {
        let config = BoardConfig::default();
        // 흑 상이 (2,2)에서 갈 수 있는 곳은 진영 네 귀퉁이
        let targets = elephant_targets(&config, 2, 2, 3);
        assert_eq!(targets.len(), 4);
        assert!(targets.contains(&(0, 0)));
        assert!(targets.contains(&(4, 4)));
        // 진영 경계의 상은 강 건너 칸이 걸러진다
        let targets = elephant_targets(&config, 4, 2, 3);
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&(2, 0)));
        assert!(targets.contains(&(2, 4)));
    }

    #[test]
    fn test_blocking_cells() {
        assert_eq!(horse_leg(2, 2, 4, 3), (3, 2));
        assert_eq!(horse_leg(2, 2, 1, 0), (2, 1));
        assert_eq!(elephant_eye(2, 2, 4, 4), (3, 3));
        assert_eq!(elephant_eye(2, 2, 0, 4), (1, 3));
    }

    #[test]
    fn test_line_targets_skip_river() {
        let config = BoardConfig::default();
        let targets = line_targets(&config, 0, 6);
        // 위쪽으로 강 칸 (0,5)는 빠지고 (0,4)부터 이어진다
        assert!(!targets.contains(&(0, 5)));
        assert!(targets.contains(&(0, 4)));
        assert!(targets.contains(&(0, 0)));
        // 오른쪽으로도 (5,6)은 빠진다
        assert!(!targets.contains(&(5, 6)));
        assert!(targets.contains(&(10, 6)));
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(3, 3, 3, 0), Some(Direction::Up));
        assert_eq!(Direction::between(3, 3, 7, 3), Some(Direction::Right));
        assert_eq!(Direction::between(3, 3, 1, 5), Some(Direction::DownLeft));
        assert_eq!(Direction::between(3, 3, 3, 3), None);
    }

    #[test]
    fn test_pawn_forward_by_half() {
        let config = BoardConfig::default();
        // 홍 진영 (y 6..=10, 중앙 8): 위쪽 절반은 Up, 아래쪽 절반은 Right
        assert_eq!(pawn_forward(&config, 0, 7, 0), Direction::Up);
        assert_eq!(pawn_forward(&config, 3, 10, 0), Direction::Right);
        // 청 진영 (x 6..=10, 중앙 8): 왼쪽 절반은 Left, 오른쪽 절반은 Down
        assert_eq!(pawn_forward(&config, 7, 0, 1), Direction::Left);
        assert_eq!(pawn_forward(&config, 10, 3, 1), Direction::Down);
    }

    #[test]
    fn test_pawn_directions_before_and_after_river() {
        let config = BoardConfig::default();
        // 건너기 전에는 전진 한 방향뿐
        assert_eq!(pawn_directions(&config, 0, 7, 0), vec![Direction::Up]);
        // 강 칸 위에 선 순간부터 건넌 것으로 본다
        let on_river = pawn_directions(&config, 0, 5, 0);
        assert!(on_river.contains(&Direction::Up));
        assert!(on_river.contains(&Direction::Left));
        assert!(on_river.contains(&Direction::Right));
        // 적 진영 깊숙이 들어가도 동일
        let crossed = pawn_directions(&config, 0, 4, 0);
        assert_eq!(crossed.len(), 3);
    }

    #[test]
    fn test_pawn_side_only_rule() {
        let config = BoardConfig {
            pawn_river_rule: PawnRiverRule::SideOnly,
            ..BoardConfig::default()
        };
        // SideOnly 변종에서는 건넌 뒤 전진이 빠진다
        let crossed = pawn_directions(&config, 0, 4, 0);
        assert_eq!(crossed, vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_initial_layout_inside_areas() {
        let config = BoardConfig::default();
        for player in 0..NUM_PLAYERS as PlayerId {
            let layout = config.initial_layout(player);
            assert_eq!(layout.len(), 10);
            let kings = layout
                .iter()
                .filter(|&&(kind, _, _)| kind == PieceKind::King)
                .count();
            assert_eq!(kings, 1);
            for &(kind, x, y) in layout {
                assert!(config.is_in_player_area(x, y, player));
                if kind == PieceKind::King || kind == PieceKind::Advisor {
                    assert!(config.is_in_palace(x, y, player));
                }
            }
        }
    }
}
