#![allow(dead_code)]

//! 4인 상치 게임 엔진.
//!
//! `GameState`가 보드와 기록을 소유하고, `GameEngine`이 규칙 검증과
//! 장군/외통 판정, 외부 경계 진입점을 맡는다.

use std::collections::HashMap;

// 기하 연산 크레이트 사용
use geometry::{
    elephant_eye, elephant_targets, horse_leg, horse_targets, is_on_same_line, line_targets,
    manhattan_distance, path_between, pawn_directions,
};

// 설정/기본 타입을 공개적으로 재export
pub use geometry::{BoardConfig, Direction, PawnRiverRule, PieceKind, PlayerId, Team, NUM_PLAYERS};

/// 디버그 로그 출력 (WASM 환경에서는 JS console.log로 전달)
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

#[cfg(target_arch = "wasm32")]
fn log_debug(msg: &str) {
    log(msg);
}

#[cfg(not(target_arch = "wasm32"))]
fn log_debug(msg: &str) {
    println!("DEBUG: {}", msg);
}

/// 현재 시각 (epoch 밀리초). 기록의 timestamp용.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    date_now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// 게임 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Playing,
    Finished,
}

/// 보드 위의 기물. 좌표를 함께 들고 다녀서 역색인 없이 순회로 찾는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: PlayerId,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: PlayerId, x: i32, y: i32) -> Self {
        Self { kind, owner, x, y }
    }

    /// 기보 표기용 한자 이름
    pub fn label(&self) -> &'static str {
        self.kind.label(self.owner)
    }
}

/// 한 수의 기록. 되돌리기와 재생에 필요한 정보 전부를 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub piece: PieceKind,
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub captured: Option<Piece>,
    pub turn: u32,
    pub timestamp: u64,
}

impl MoveRecord {
    /// 사람이 읽는 기보 문자열: 车(0,9)→(0,4) / 잡은 수는 吃 뒤에 희생 기물
    pub fn format(&self) -> String {
        let name = self.piece.label(self.player);
        match &self.captured {
            Some(victim) => format!(
                "{}({},{})→({},{}) 吃{}",
                name, self.from.0, self.from.1, self.to.0, self.to.1,
                victim.label()
            ),
            None => format!(
                "{}({},{})→({},{})",
                name, self.from.0, self.from.1, self.to.0, self.to.1
            ),
        }
    }
}

/// attempt_move 결과. 평가 순서는 수행 → 궁 생존 → 장군 → 외통.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub success: bool,
    pub captured: Option<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub game_ended: bool,
    pub winner: Option<Team>,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            success: false,
            captured: None,
            is_check: false,
            is_checkmate: false,
            game_ended: false,
            winner: None,
        }
    }
}

/// 게임 상태 요약 스냅샷
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfo {
    pub current_player: PlayerId,
    pub phase: GamePhase,
    pub turn: u32,
    pub piece_counts: [u32; NUM_PLAYERS],
    pub winner: Option<Team>,
    pub move_count: usize,
}

/// 보드 상태의 소유자. 배치/이동/되돌리기만 담당하고
/// 규칙 검증은 하지 않는다 — 합법성은 GameEngine 몫이다.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: HashMap<(i32, i32), Piece>,
    pub current_player: PlayerId,
    pub phase: GamePhase,
    pub move_history: Vec<MoveRecord>,
    pub selected: Option<(i32, i32)>,
    pub possible_moves: Vec<(i32, i32)>,
    pub winner: Option<Team>,
    pub turn: u32,
    pub piece_counts: [u32; NUM_PLAYERS],
}

impl GameState {
    pub fn new(config: &BoardConfig) -> Self {
        let mut state = Self {
            board: HashMap::new(),
            current_player: 0,
            phase: GamePhase::Ready,
            move_history: Vec::new(),
            selected: None,
            possible_moves: Vec::new(),
            winner: None,
            turn: 1,
            piece_counts: [0; NUM_PLAYERS],
        };
        state.place_initial_pieces(config);
        state
    }

    fn place_initial_pieces(&mut self, config: &BoardConfig) {
        for player in 0..NUM_PLAYERS as PlayerId {
            for &(kind, x, y) in config.initial_layout(player) {
                self.set_piece(config, x, y, Piece::new(kind, player, x, y));
                self.piece_counts[player as usize] += 1;
            }
        }
    }

    /// 지정 위치의 기물. 범위 밖이면 None.
    pub fn get_piece(&self, config: &BoardConfig, x: i32, y: i32) -> Option<&Piece> {
        if !config.is_valid_position(x, y) {
            return None;
        }
        self.board.get(&(x, y))
    }

    /// 기물 배치. 범위 밖 좌표는 조용히 무시한다.
    pub fn set_piece(&mut self, config: &BoardConfig, x: i32, y: i32, mut piece: Piece) {
        if !config.is_valid_position(x, y) {
            return;
        }
        piece.x = x;
        piece.y = y;
        self.board.insert((x, y), piece);
    }

    /// 기물 제거. 제거한 기물을 돌려준다.
    pub fn remove_piece(&mut self, config: &BoardConfig, x: i32, y: i32) -> Option<Piece> {
        if !config.is_valid_position(x, y) {
            return None;
        }
        self.board.remove(&(x, y))
    }

    /// 기물 이동. 규칙 검증 없이 그대로 수행한다.
    /// 목적지의 기물은 잡히고, 기록을 남긴 뒤 다음 플레이어 차례가 된다.
    pub fn move_piece(
        &mut self,
        config: &BoardConfig,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    ) -> bool {
        if !config.is_valid_position(from_x, from_y) || !config.is_valid_position(to_x, to_y) {
            return false;
        }
        let piece = match self.remove_piece(config, from_x, from_y) {
            Some(p) => p,
            None => return false,
        };
        let captured = self.remove_piece(config, to_x, to_y);
        if let Some(ref victim) = captured {
            let count = &mut self.piece_counts[victim.owner as usize];
            *count = count.saturating_sub(1);
        }
        let record = MoveRecord {
            player: piece.owner,
            piece: piece.kind,
            from: (from_x, from_y),
            to: (to_x, to_y),
            captured: captured.clone(),
            turn: self.turn,
            timestamp: now_ms(),
        };
        self.set_piece(config, to_x, to_y, piece);
        self.move_history.push(record);
        self.next_player(config);
        true
    }

    /// 순번표를 따라 다음 플레이어로 (시계 방향 0 → 2 → 1 → 3)
    pub fn next_player(&mut self, config: &BoardConfig) {
        self.current_player = config.next_in_rotation(self.current_player);
        self.selected = None;
        self.possible_moves.clear();
        self.turn += 1;
    }

    /// 마지막 수를 되돌린다. move_piece의 역연산.
    pub fn undo_move(&mut self, config: &BoardConfig) -> bool {
        let last = match self.move_history.pop() {
            Some(m) => m,
            None => return false,
        };
        if let Some(piece) = self.remove_piece(config, last.to.0, last.to.1) {
            self.set_piece(config, last.from.0, last.from.1, piece);
        }
        if let Some(captured) = last.captured {
            self.piece_counts[captured.owner as usize] += 1;
            self.set_piece(config, last.to.0, last.to.1, captured);
        }
        self.current_player = last.player;
        self.turn = last.turn;
        self.selected = None;
        self.possible_moves.clear();
        true
    }

    /// 초기 배치로 되돌린다
    pub fn reset(&mut self, config: &BoardConfig) {
        self.board.clear();
        self.current_player = 0;
        self.phase = GamePhase::Ready;
        self.move_history.clear();
        self.selected = None;
        self.possible_moves.clear();
        self.winner = None;
        self.turn = 1;
        self.piece_counts = [0; NUM_PLAYERS];
        self.place_initial_pieces(config);
    }

    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
    }

    /// 궁이 사라진 플레이어가 있으면 게임을 끝낸다.
    /// 탈락은 팀 단위: 어느 한쪽 궁이라도 잃은 팀이 패배한다.
    pub fn check_game_end(&mut self, config: &BoardConfig) -> bool {
        let mut has_king = [false; NUM_PLAYERS];
        for piece in self.board.values() {
            if piece.kind == PieceKind::King {
                has_king[piece.owner as usize] = true;
            }
        }
        let mut team_one_lost = false;
        let mut team_two_lost = false;
        for player in 0..NUM_PLAYERS as PlayerId {
            if !has_king[player as usize] {
                match config.team_of(player) {
                    Team::One => team_one_lost = true,
                    Team::Two => team_two_lost = true,
                }
            }
        }
        if !team_one_lost && !team_two_lost {
            return false;
        }
        self.phase = GamePhase::Finished;
        self.winner = if team_one_lost {
            Some(Team::Two)
        } else {
            Some(Team::One)
        };
        true
    }

    /// 플레이어의 궁 위치
    pub fn find_king(&self, player: PlayerId) -> Option<(i32, i32)> {
        self.board
            .values()
            .find(|p| p.kind == PieceKind::King && p.owner == player)
            .map(|p| (p.x, p.y))
    }

    /// 플레이어의 모든 기물 위치
    pub fn player_pieces(&self, player: PlayerId) -> Vec<(i32, i32)> {
        self.board
            .values()
            .filter(|p| p.owner == player)
            .map(|p| (p.x, p.y))
            .collect()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    pub fn game_info(&self) -> GameInfo {
        GameInfo {
            current_player: self.current_player,
            phase: self.phase,
            turn: self.turn,
            piece_counts: self.piece_counts,
            winner: self.winner,
            move_count: self.move_history.len(),
        }
    }
}

/// 규칙 검증 + 장군 판정 + 외부 경계.
/// 생성 시점에 BoardConfig를 받아 GameState와 함께 소유한다.
pub struct GameEngine {
    pub config: BoardConfig,
    pub state: GameState,
    pub debug_mode: bool,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            debug_mode: false,
        }
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug_mode = enabled;
        if enabled {
            log_debug("디버그 모드 활성화");
        }
    }

    pub fn start_game(&mut self) {
        self.state.start_game();
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.config);
    }

    pub fn get_piece(&self, x: i32, y: i32) -> Option<&Piece> {
        self.state.get_piece(&self.config, x, y)
    }

    /// 보드 위 모든 기물의 복사본
    pub fn all_pieces(&self) -> Vec<Piece> {
        self.state.board.values().cloned().collect()
    }

    pub fn game_info(&self) -> GameInfo {
        self.state.game_info()
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.state.move_history
    }

    /// 진행 중이고 기록이 있을 때만 무를 수 있다
    pub fn undo(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.undo_move(&self.config)
    }

    /// 현재 플레이어의 팀이 기권한다. 상대 팀 승리로 즉시 종료.
    pub fn surrender(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.phase = GamePhase::Finished;
        self.state.winner = Some(self.config.team_of(self.state.current_player).opponent());
        true
    }

    /// 현재 플레이어의 기물을 선택하고 합법 목적지를 캐시한다
    pub fn select_piece(&mut self, x: i32, y: i32) -> bool {
        let owner = match self.get_piece(x, y) {
            Some(p) => p.owner,
            None => {
                self.state.selected = None;
                self.state.possible_moves.clear();
                return false;
            }
        };
        if owner != self.state.current_player {
            self.state.selected = None;
            self.state.possible_moves.clear();
            return false;
        }
        let moves = self.valid_moves(x, y);
        self.state.selected = Some((x, y));
        self.state.possible_moves = moves;
        true
    }

    /// (from)의 기물이 (to)로 합법적으로 이동할 수 있는가.
    /// 기본 검사 → 기물별 행마 규칙 → 자기 장군 노출 검사 순서.
    pub fn is_valid_move(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        if !self.basic_move_valid(from_x, from_y, to_x, to_y) {
            return false;
        }
        let piece = match self.get_piece(from_x, from_y) {
            Some(p) => p.clone(),
            None => return false,
        };
        if !self.shape_valid(&piece, from_x, from_y, to_x, to_y) {
            return false;
        }
        if self.would_leave_in_check(from_x, from_y, to_x, to_y, piece.owner) {
            if self.debug_mode {
                log_debug(&format!(
                    "거부: ({},{})→({},{}) 수를 두면 자기 궁이 장군에 노출됨",
                    from_x, from_y, to_x, to_y
                ));
            }
            return false;
        }
        true
    }

    /// 기물 종류와 무관한 공통 검사
    fn basic_move_valid(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let config = &self.config;
        if !config.is_valid_position(from_x, from_y) || !config.is_valid_position(to_x, to_y) {
            return false;
        }
        if from_x == to_x && from_y == to_y {
            return false;
        }
        let piece = match self.state.get_piece(config, from_x, from_y) {
            Some(p) => p,
            None => return false,
        };
        if piece.owner != self.state.current_player {
            return false;
        }
        // 강 칸 위에는 병/졸만 설 수 있다
        if config.is_river_position(to_x, to_y) && piece.kind != PieceKind::Pawn {
            return false;
        }
        if let Some(target) = self.state.get_piece(config, to_x, to_y) {
            // 자기 기물도, 같은 팀 기물도 잡을 수 없다
            if config.is_teammate(piece.owner, target.owner) {
                return false;
            }
        }
        true
    }

    /// 기물 종류별 행마 규칙. 공격 판정에서도 같은 함수를 쓴다.
    fn shape_valid(&self, piece: &Piece, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        match piece.kind {
            PieceKind::King => self.king_shape(from_x, from_y, to_x, to_y, piece.owner),
            PieceKind::Advisor => self.advisor_shape(from_x, from_y, to_x, to_y, piece.owner),
            PieceKind::Elephant => self.elephant_shape(from_x, from_y, to_x, to_y, piece.owner),
            PieceKind::Horse => self.horse_shape(from_x, from_y, to_x, to_y),
            PieceKind::Rook => self.rook_shape(from_x, from_y, to_x, to_y),
            PieceKind::Cannon => self.cannon_shape(from_x, from_y, to_x, to_y),
            PieceKind::Pawn => self.pawn_shape(from_x, from_y, to_x, to_y, piece.owner),
        }
    }

    /// 궁: 궁성 안에서 가로/세로 한 칸
    fn king_shape(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32, player: PlayerId) -> bool {
        self.config.is_in_palace(to_x, to_y, player)
            && manhattan_distance(from_x, from_y, to_x, to_y) == 1
            && is_on_same_line(from_x, from_y, to_x, to_y)
    }

    /// 사: 궁성 안에서 대각 한 칸
    fn advisor_shape(
        &self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        player: PlayerId,
    ) -> bool {
        self.config.is_in_palace(to_x, to_y, player)
            && (to_x - from_x).abs() == 1
            && (to_y - from_y).abs() == 1
    }

    /// 상: 자기 진영 안에서 대각 두 칸, 눈이 비어 있어야 한다
    fn elephant_shape(
        &self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        player: PlayerId,
    ) -> bool {
        if !self.config.is_in_player_area(to_x, to_y, player) {
            return false;
        }
        if (to_x - from_x).abs() != 2 || (to_y - from_y).abs() != 2 {
            return false;
        }
        let (ex, ey) = elephant_eye(from_x, from_y, to_x, to_y);
        self.state.get_piece(&self.config, ex, ey).is_none()
    }

    /// 마: 날 일자, 다리가 비어 있어야 한다
    fn horse_shape(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let dx = (to_x - from_x).abs();
        let dy = (to_y - from_y).abs();
        if !((dx == 2 && dy == 1) || (dx == 1 && dy == 2)) {
            return false;
        }
        let (lx, ly) = horse_leg(from_x, from_y, to_x, to_y);
        self.state.get_piece(&self.config, lx, ly).is_none()
    }

    /// 직선 경로에서 강 칸을 제외한 장애물 수.
    /// 강 위의 기물은 병/졸뿐이고, 강은 직선 이동을 막지 않는다.
    fn obstacles_between(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> usize {
        path_between(from_x, from_y, to_x, to_y)
            .into_iter()
            .filter(|&(x, y)| !self.config.is_river_position(x, y))
            .filter(|&(x, y)| self.state.get_piece(&self.config, x, y).is_some())
            .count()
    }

    /// 차: 직선, 경로가 비어 있어야 한다
    fn rook_shape(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        is_on_same_line(from_x, from_y, to_x, to_y)
            && self.obstacles_between(from_x, from_y, to_x, to_y) == 0
    }

    /// 포: 이동은 빈 경로, 잡기는 가림돌 정확히 하나
    fn cannon_shape(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        if !is_on_same_line(from_x, from_y, to_x, to_y) {
            return false;
        }
        let obstacles = self.obstacles_between(from_x, from_y, to_x, to_y);
        if self.state.get_piece(&self.config, to_x, to_y).is_some() {
            obstacles == 1
        } else {
            obstacles == 0
        }
    }

    /// 병/졸: 허용된 방향으로 한 칸
    fn pawn_shape(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32, player: PlayerId) -> bool {
        pawn_directions(&self.config, from_x, from_y, player)
            .into_iter()
            .any(|dir| dir.step(from_x, from_y, 1) == (to_x, to_y))
    }

    /// 수를 두었다고 가정했을 때 자기 궁이 장군에 노출되는가.
    /// 원점과 목적지 두 칸만 스냅샷했다가 판정 후 반드시 복구한다.
    fn would_leave_in_check(
        &mut self,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        player: PlayerId,
    ) -> bool {
        let moved = match self.state.board.remove(&(from_x, from_y)) {
            Some(p) => p,
            None => return false,
        };
        let captured = self.state.board.remove(&(to_x, to_y));
        let mut placed = moved.clone();
        placed.x = to_x;
        placed.y = to_y;
        self.state.board.insert((to_x, to_y), placed);

        let in_check = self.is_in_check(player);

        self.state.board.remove(&(to_x, to_y));
        self.state.board.insert((from_x, from_y), moved);
        if let Some(victim) = captured {
            self.state.board.insert((to_x, to_y), victim);
        }

        in_check
    }

    /// (x,y)가 player의 적 기물에게 공격받고 있는가.
    /// 행마 규칙만 본다 — 공격자 쪽 자기 장군 노출은 따지지 않는다 (재귀 방지).
    pub fn is_position_under_attack(&self, x: i32, y: i32, player: PlayerId) -> bool {
        for piece in self.state.board.values() {
            if self.config.is_enemy(piece.owner, player)
                && self.shape_valid(piece, piece.x, piece.y, x, y)
            {
                return true;
            }
        }
        false
    }

    /// 플레이어의 궁이 장군 상태인가. 궁이 이미 없으면 false.
    pub fn is_in_check(&self, player: PlayerId) -> bool {
        match self.state.find_king(player) {
            Some((kx, ky)) => self.is_position_under_attack(kx, ky, player),
            None => false,
        }
    }

    /// 장군 상태에서 어떤 합법수로도 벗어날 수 없으면 외통.
    /// 검증기가 자기 장군 노출 수를 이미 걸러내므로,
    /// 남은 합법수가 하나라도 있으면 그 수가 장군을 벗어난다.
    pub fn is_checkmate(&mut self, player: PlayerId) -> bool {
        if !self.is_in_check(player) {
            return false;
        }
        for (px, py) in self.state.player_pieces(player) {
            if !self.valid_moves(px, py).is_empty() {
                return false;
            }
        }
        true
    }

    /// (x,y) 기물의 모든 합법 목적지. 빈 칸이면 빈 목록.
    pub fn valid_moves(&mut self, x: i32, y: i32) -> Vec<(i32, i32)> {
        let piece = match self.get_piece(x, y) {
            Some(p) => p.clone(),
            None => return Vec::new(),
        };
        let mut moves = Vec::new();
        for (tx, ty) in self.candidate_moves(&piece, x, y) {
            if self.is_valid_move(x, y, tx, ty) {
                moves.push((tx, ty));
            }
        }
        moves
    }

    /// 기하적으로 가능한 후보 목적지 (검증 전)
    fn candidate_moves(&self, piece: &Piece, x: i32, y: i32) -> Vec<(i32, i32)> {
        let config = &self.config;
        match piece.kind {
            PieceKind::King => [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ]
            .iter()
            .map(|dir| dir.step(x, y, 1))
            .filter(|&(nx, ny)| {
                config.is_valid_position(nx, ny) && config.is_in_palace(nx, ny, piece.owner)
            })
            .collect(),
            PieceKind::Advisor => [
                Direction::UpLeft,
                Direction::UpRight,
                Direction::DownLeft,
                Direction::DownRight,
            ]
            .iter()
            .map(|dir| dir.step(x, y, 1))
            .filter(|&(nx, ny)| {
                config.is_valid_position(nx, ny) && config.is_in_palace(nx, ny, piece.owner)
            })
            .collect(),
            PieceKind::Elephant => elephant_targets(config, x, y, piece.owner),
            PieceKind::Horse => horse_targets(config, x, y),
            PieceKind::Rook | PieceKind::Cannon => line_targets(config, x, y),
            PieceKind::Pawn => pawn_directions(config, x, y, piece.owner)
                .into_iter()
                .map(|dir| dir.step(x, y, 1))
                .filter(|&(nx, ny)| config.is_valid_position(nx, ny))
                .collect(),
        }
    }

    /// 외부 표시 계층이 호출하는 단일 진입점.
    /// 검증 → 수행 → 궁 생존 확인 → 다음 플레이어 장군/외통 판정.
    pub fn attempt_move(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> MoveOutcome {
        if self.state.phase != GamePhase::Playing {
            return MoveOutcome::rejected();
        }
        if !self.is_valid_move(from_x, from_y, to_x, to_y) {
            return MoveOutcome::rejected();
        }

        let captured = self.get_piece(to_x, to_y).cloned();
        if !self.state.move_piece(&self.config, from_x, from_y, to_x, to_y) {
            return MoveOutcome::rejected();
        }
        if self.debug_mode {
            if let Some(record) = self.state.last_move() {
                log_debug(&format!("이동: {}", record.format()));
            }
        }

        let mut game_ended = self.state.check_game_end(&self.config);
        let mut is_check = false;
        let mut is_checkmate = false;
        if !game_ended {
            let next = self.state.current_player;
            is_check = self.is_in_check(next);
            if is_check && self.is_checkmate(next) {
                is_checkmate = true;
                // 외통이면 공격한 팀의 승리로 즉시 종료
                self.state.phase = GamePhase::Finished;
                self.state.winner = Some(self.config.team_of(next).opponent());
                game_ended = true;
            }
        }

        MoveOutcome {
            success: true,
            captured,
            is_check,
            is_checkmate,
            game_ended,
            winner: self.state.winner,
        }
    }

    /// 초기 배치에서 기록을 순서대로 다시 적용해 상태를 재구성한다.
    /// 저장/복원 계층이 MoveRecord 목록만으로 게임을 복원할 때 쓴다.
    /// 기록은 신뢰하고 재검증하지 않는다.
    pub fn replay(&mut self, records: &[MoveRecord]) -> bool {
        self.reset();
        self.start_game();
        for record in records {
            if !self.state.move_piece(
                &self.config,
                record.from.0,
                record.from.1,
                record.to.0,
                record.to.1,
            ) {
                return false;
            }
        }
        self.state.check_game_end(&self.config);
        true
    }
}
